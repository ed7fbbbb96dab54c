//! Oracle Cloud Infrastructure provider for instancectl
//!
//! This crate implements the Provider trait for OCI compute instances.
//!
//! # Requirements
//!
//! - `oci` CLI must be installed and configured
//! - Authentication is managed through the oci configuration (`~/.oci/config`)
//!
//! # Example
//!
//! ```ignore
//! use instancectl_cloud::Provider;
//! use instancectl_cloud_oci::{OciOptions, OciProvider};
//!
//! let provider = OciProvider::new(OciOptions::default());
//!
//! let state = provider.get_instance_state("ocid1.instance.oc1.phx.abc").await?;
//! provider.perform_instance_action("ocid1.instance.oc1.phx.abc", "STOP").await?;
//! ```

pub mod error;
pub mod oci_cli;
pub mod provider;

pub use error::{OciError, Result};
pub use oci_cli::{InstanceInfo, OciCli, OciOptions};
pub use provider::{OCI_SLUG, OciProvider};
