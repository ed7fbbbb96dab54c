use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 一時ディレクトリ上のストアと空の設定ファイル
pub struct TestStore {
    pub root: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("config.yaml"), "").unwrap();
        Self { root }
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.path().join("store.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.yaml")
    }

    pub fn write_store(&self, content: &str) {
        fs::write(self.store_path(), content).unwrap();
    }

    #[allow(dead_code)]
    pub fn read_store(&self) -> String {
        fs::read_to_string(self.store_path()).unwrap()
    }

    /// ストアと設定を固定した instancectl コマンド
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("instancectl").unwrap();
        cmd.env_remove("INSTANCECTL_STORE")
            .env_remove("INSTANCECTL_CONFIG_PATH")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--store")
            .arg(self.store_path())
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}
