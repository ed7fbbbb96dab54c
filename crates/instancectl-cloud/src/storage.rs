//! Durable storage for the instance registry
//!
//! A [`StorageDriver`] reads and writes one opaque JSON document. It knows
//! nothing about the schema; the registry owns that.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of reading the store
#[derive(Debug, Clone, PartialEq)]
pub enum Restored {
    /// A previously persisted document
    Found(Value),
    /// Nothing has been persisted yet
    NotFound,
}

/// Storage backend for a single JSON document
#[async_trait]
pub trait StorageDriver: Send + Sync {
    /// Replace the stored document
    async fn persist(&self, document: &Value) -> Result<()>;

    /// Read the stored document
    ///
    /// A store that was never written is [`Restored::NotFound`], not an error.
    async fn restore(&self) -> Result<Restored>;
}

/// Stores the document as a JSON file at a fixed path
///
/// Output is pretty-printed with sorted keys, 2-space indent and a trailing
/// newline, so writing the same content twice yields identical bytes.
/// There is no locking: concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct FileSystemDriver {
    path: PathBuf,
}

impl FileSystemDriver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the document is staged in before being renamed into place
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Render a document the way it is stored on disk
fn render_document(document: &Value) -> Result<String> {
    // serde_json::Map is ordered by key, so objects come out sorted
    let mut content = serde_json::to_string_pretty(document)?;
    content.push('\n');
    Ok(content)
}

#[async_trait]
impl StorageDriver for FileSystemDriver {
    async fn persist(&self, document: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
                tracing::debug!("Created store directory: {}", parent.display());
            }
        }

        let content = render_document(document)?;
        let staging = self.staging_path();
        fs::write(&staging, &content).await?;
        fs::rename(&staging, &self.path).await?;

        tracing::debug!(
            "Wrote {} bytes to {}",
            content.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn restore(&self) -> Result<Restored> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Store not found at {}, starting empty", self.path.display());
                return Ok(Restored::NotFound);
            }
            Err(e) => return Err(e.into()),
        };

        let document: Value = serde_json::from_str(&content)?;
        tracing::debug!(
            "Read {} bytes from {}",
            content.len(),
            self.path.display()
        );
        Ok(Restored::Found(document))
    }
}
