//! 設定ファイルのデータモデルと読み込み

use crate::error::{ConfigError, Result};
use crate::{default_store_path, expand_home, find_config_file};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// instancectl の設定
///
/// ```yaml
/// store_path: ~/.instancectl
/// oci:
///   profile: DEFAULT
///   config_file: ~/.oci/config
///   region: eu-frankfurt-1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// インスタンス一覧を保存するJSONファイル（省略時は ~/.instancectl）
    pub store_path: Option<PathBuf>,

    /// OCIプロバイダーの接続設定
    pub oci: OciSettings,
}

/// OCIプロバイダーの接続設定（未指定の項目は oci CLI のデフォルトに従う）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OciSettings {
    pub profile: Option<String>,
    pub config_file: Option<PathBuf>,
    pub region: Option<String>,
}

/// コマンドラインから渡された上書き値
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub store_path: Option<PathBuf>,
    pub oci_profile: Option<String>,
    pub oci_config_file: Option<PathBuf>,
    pub oci_region: Option<String>,
}

impl Settings {
    /// YAMLファイルから読み込む
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        // 空ファイルはデフォルト設定として扱う
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// コマンドライン引数で上書きする
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if overrides.store_path.is_some() {
            self.store_path = overrides.store_path;
        }
        if overrides.oci_profile.is_some() {
            self.oci.profile = overrides.oci_profile;
        }
        if overrides.oci_config_file.is_some() {
            self.oci.config_file = overrides.oci_config_file;
        }
        if overrides.oci_region.is_some() {
            self.oci.region = overrides.oci_region;
        }
        self
    }

    /// ストアの実パス（`~/` 展開済み）
    pub fn resolved_store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => expand_home(path),
            None => default_store_path(),
        }
    }

    /// OCI設定ファイルの実パス（`~/` 展開済み）
    pub fn resolved_oci_config_file(&self) -> Result<Option<PathBuf>> {
        self.oci
            .config_file
            .as_deref()
            .map(expand_home)
            .transpose()
    }
}

/// 設定ファイルを発見して読み込み、コマンドライン引数を適用する
pub fn load_settings(explicit: Option<&Path>, overrides: Overrides) -> Result<Settings> {
    let settings = match find_config_file(explicit)? {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            Settings::from_file(&path)?
        }
        None => Settings::default(),
    };
    Ok(settings.apply(overrides))
}
