//! OCI provider error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OciError {
    #[error("oci CLI not found. Please install: https://docs.oracle.com/iaas/Content/API/SDKDocs/cliinstall.htm")]
    CliNotFound,

    #[error("oci command failed: {0}")]
    CommandFailed(String),

    #[error("Unexpected oci output: {0}")]
    UnexpectedOutput(String),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OciError>;
