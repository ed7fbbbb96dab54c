//! Cloud provider trait definition

use crate::error::Result;
use async_trait::async_trait;

/// Cloud provider abstraction trait
///
/// Every compute backend (OCI, ...) implements this trait. The registry and the
/// factory only ever see providers through it, looked up by [`Provider::slug`].
#[async_trait]
pub trait Provider: Send + Sync {
    /// Returns the provider slug (e.g., "oci")
    ///
    /// The slug is written into the store as the discriminator of every
    /// record, so it must never change and must be unique per process.
    fn slug(&self) -> &str;

    /// Returns the provider display name for UI
    fn display_name(&self) -> &str;

    /// Query the current lifecycle state of a remote instance
    async fn get_instance_state(&self, remote_id: &str) -> Result<String>;

    /// Query the display name and lifecycle state of a remote instance
    async fn get_instance_details(&self, remote_id: &str) -> Result<InstanceDetails> {
        let state = self.get_instance_state(remote_id).await?;
        Ok(InstanceDetails::new(remote_id, state))
    }

    /// Submit a lifecycle action (e.g., "START", "STOP") for a remote instance
    ///
    /// The action string is passed to the backend as-is.
    async fn perform_instance_action(&self, remote_id: &str, action: &str) -> Result<()>;
}

/// Instance details reported by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDetails {
    /// Human-readable name of the instance on the backend
    pub display_name: String,

    /// Backend lifecycle state (e.g., "RUNNING")
    pub state: String,
}

impl InstanceDetails {
    pub fn new(display_name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            state: state.into(),
        }
    }
}
