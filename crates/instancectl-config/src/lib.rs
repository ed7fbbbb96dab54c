pub mod error;
pub mod settings;

pub use error::*;
pub use settings::*;

use std::path::{Path, PathBuf};

/// 設定ファイルパスを直接指定する環境変数
pub const CONFIG_PATH_ENV: &str = "INSTANCECTL_CONFIG_PATH";

const CONFIG_FILENAME: &str = "config.yaml";
const STORE_FILENAME: &str = ".instancectl";

/// instancectlの設定ディレクトリ (~/.config/instancectl)
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("instancectl");
    Ok(config_dir)
}

/// 設定ファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 引数で明示されたパス (--config)
/// 2. 環境変数 INSTANCECTL_CONFIG_PATH
/// 3. ~/.config/instancectl/config.yaml
///
/// 1, 2 で指定されたファイルが存在しない場合はエラー。
/// 3 が存在しない場合は設定ファイルなしとして None を返す。
pub fn find_config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    // 1. 明示的な指定
    if let Some(path) = explicit {
        return require_file(path.to_path_buf()).map(Some);
    }

    // 2. 環境変数で直接指定
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        return require_file(PathBuf::from(config_path)).map(Some);
    }

    // 3. グローバル設定ファイル
    let global_config = get_config_dir()?.join(CONFIG_FILENAME);
    if global_config.exists() {
        return Ok(Some(global_config));
    }

    tracing::debug!("No config file found, using defaults");
    Ok(None)
}

fn require_file(path: PathBuf) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(ConfigError::ConfigFileNotFound(path))
    }
}

/// デフォルトのストアパス (~/.instancectl)
pub fn default_store_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home.join(STORE_FILENAME))
}

/// 先頭の `~/` をホームディレクトリに展開する
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}
