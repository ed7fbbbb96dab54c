//! Cloud provider and registry error types

use thiserror::Error;

/// Errors raised by the registry, the store and the providers behind it
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Provider registered twice: {0}")]
    DuplicateProvider(String),

    #[error("Key already exists: {0}")]
    DuplicateKey(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid store document: {0}")]
    InvalidDocument(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CloudError>;
