//! OCI provider implementation

use crate::error::OciError;
use crate::oci_cli::{OciCli, OciOptions, parse_instance};
use async_trait::async_trait;
use instancectl_cloud::{CloudError, InstanceDetails, Provider};

/// Slug stored in the registry for instances managed by this provider
pub const OCI_SLUG: &str = "oci";

/// Oracle Cloud Infrastructure provider
pub struct OciProvider {
    cli: OciCli,
}

impl OciProvider {
    pub fn new(options: OciOptions) -> Self {
        Self {
            cli: OciCli::new(options),
        }
    }

    pub fn with_cli(cli: OciCli) -> Self {
        Self { cli }
    }
}

fn into_cloud_error(e: OciError) -> CloudError {
    match e {
        OciError::CommandFailed(stderr) => CloudError::CommandFailed(stderr),
        other => CloudError::Api(other.to_string()),
    }
}

#[async_trait]
impl Provider for OciProvider {
    fn slug(&self) -> &str {
        OCI_SLUG
    }

    fn display_name(&self) -> &str {
        "Oracle Cloud Infrastructure"
    }

    async fn get_instance_state(&self, remote_id: &str) -> instancectl_cloud::Result<String> {
        let instance = self
            .cli
            .get_instance(remote_id)
            .await
            .map_err(into_cloud_error)?;
        Ok(instance.lifecycle_state)
    }

    async fn get_instance_details(
        &self,
        remote_id: &str,
    ) -> instancectl_cloud::Result<InstanceDetails> {
        let instance = self
            .cli
            .get_instance(remote_id)
            .await
            .map_err(into_cloud_error)?;
        Ok(InstanceDetails::new(
            instance.display_name,
            instance.lifecycle_state,
        ))
    }

    async fn perform_instance_action(
        &self,
        remote_id: &str,
        action: &str,
    ) -> instancectl_cloud::Result<()> {
        let output = self
            .cli
            .instance_action(remote_id, action)
            .await
            .map_err(into_cloud_error)?;

        match parse_instance(&output) {
            Ok(instance) => tracing::debug!(
                "{} accepted {}, now {}",
                instance.id,
                action,
                instance.lifecycle_state
            ),
            Err(e) => tracing::warn!(
                "{} accepted {}, unreadable response: {}",
                remote_id,
                action,
                e
            ),
        }
        Ok(())
    }
}
