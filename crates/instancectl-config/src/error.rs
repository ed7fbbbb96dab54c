use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory could not be determined")]
    ConfigDirNotFound,

    #[error("Home directory could not be determined")]
    HomeDirNotFound,

    #[error(
        "Config file not found: {0}\n\
        INSTANCECTL_CONFIG_PATH / --config must point to an existing file"
    )]
    ConfigFileNotFound(PathBuf),

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
