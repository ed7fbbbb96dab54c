//! instancectl cloud core
//!
//! This crate provides the provider abstraction and the local instance
//! registry for instancectl: remote compute instances are tracked under
//! user-chosen keys, the mapping is persisted to a local JSON document, and
//! state queries and lifecycle actions are forwarded to the provider that owns
//! each instance.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 instancectl CLI                  │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               instancectl-cloud                  │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │            InstanceRegistry               │   │
//! │  │   key → Instance { provider, remote_id }  │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────────┐  ┌──────────────────┐     │
//! │  │ InstanceFactory  │  │  StorageDriver   │     │
//! │  │ slug → Provider  │  │ (JSON document)  │     │
//! │  └──────────────────┘  └──────────────────┘     │
//! └───────┬─────────────────────────────────────────┘
//!         │  trait Provider { ... }
//! ┌───────▼───────┐
//! │      oci      │
//! │   provider    │
//! └───────────────┘
//! ```

pub mod error;
pub mod factory;
pub mod instance;
pub mod provider;
pub mod registry;
pub mod storage;

#[cfg(test)]
mod testing;

// Re-exports
pub use error::{CloudError, Result};
pub use factory::InstanceFactory;
pub use instance::{Instance, InstanceRecord};
pub use provider::{InstanceDetails, Provider};
pub use registry::{InstanceRegistry, RegistryConfig};
pub use storage::{FileSystemDriver, Restored, StorageDriver};
