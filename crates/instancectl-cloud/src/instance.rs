//! Tracked instances and their persisted record form

use crate::error::Result;
use crate::provider::{InstanceDetails, Provider};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A remote compute resource bound to the provider that manages it
#[derive(Clone)]
pub struct Instance {
    provider: Arc<dyn Provider>,
    remote_id: String,
}

impl Instance {
    pub fn new(provider: Arc<dyn Provider>, remote_id: impl Into<String>) -> Self {
        Self {
            provider,
            remote_id: remote_id.into(),
        }
    }

    pub fn provider(&self) -> &dyn Provider {
        self.provider.as_ref()
    }

    pub fn slug(&self) -> &str {
        self.provider.slug()
    }

    pub fn remote_id(&self) -> &str {
        &self.remote_id
    }

    pub async fn state(&self) -> Result<String> {
        self.provider.get_instance_state(&self.remote_id).await
    }

    pub async fn details(&self) -> Result<InstanceDetails> {
        self.provider.get_instance_details(&self.remote_id).await
    }

    pub async fn perform_action(&self, action: &str) -> Result<()> {
        self.provider
            .perform_instance_action(&self.remote_id, action)
            .await
    }

    /// Get the persisted form of this instance
    pub fn to_record(&self) -> InstanceRecord {
        InstanceRecord::new(self.slug(), &self.remote_id)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("provider", &self.slug())
            .field("remote_id", &self.remote_id)
            .finish()
    }
}

/// Persisted reference to an instance: provider slug plus remote id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    /// Remote identifier on the backend
    pub id: String,

    /// Provider slug
    pub provider: String,
}

impl InstanceRecord {
    pub fn new(provider: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
        }
    }
}
