//! oci CLI wrapper
//!
//! Wraps the `oci compute instance` commands used by the provider.

use crate::error::{OciError, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

const DEFAULT_PROGRAM: &str = "oci";

/// Connection options passed to every oci invocation
///
/// Unset values fall back to the oci CLI's own defaults
/// (`~/.oci/config`, profile `DEFAULT`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OciOptions {
    pub profile: Option<String>,
    pub config_file: Option<PathBuf>,
    pub region: Option<String>,
}

/// oci CLI wrapper
#[derive(Debug, Clone)]
pub struct OciCli {
    program: String,
    options: OciOptions,
}

impl OciCli {
    pub fn new(options: OciOptions) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            options,
        }
    }

    /// Use a different executable instead of `oci` on PATH
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Global options placed before every subcommand
    fn global_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(ref config_file) = self.options.config_file {
            args.push("--config-file".to_string());
            args.push(config_file.display().to_string());
        }
        if let Some(ref profile) = self.options.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        if let Some(ref region) = self.options.region {
            args.push("--region".to_string());
            args.push(region.clone());
        }
        args.push("--output".to_string());
        args.push("json".to_string());
        args
    }

    /// Run an oci command and return stdout
    async fn run_command(&self, args: &[&str]) -> Result<String> {
        let global = self.global_args();
        let mut cmd = Command::new(&self.program);
        cmd.args(&global);
        cmd.args(args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!(
            "Running: {} {} {}",
            self.program,
            global.join(" "),
            args.join(" ")
        );

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(OciError::CliNotFound);
            }
            Err(e) => return Err(e.into()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OciError::CommandFailed(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Get an instance by OCID
    pub async fn get_instance(&self, id: &str) -> Result<InstanceInfo> {
        let output = self
            .run_command(&["compute", "instance", "get", "--instance-id", id])
            .await?;
        parse_instance(&output)
    }

    /// Submit a lifecycle action (START, STOP, SOFTSTOP, RESET, SOFTRESET, ...)
    ///
    /// Returns the raw stdout; the action was accepted once oci exits 0.
    pub async fn instance_action(&self, id: &str, action: &str) -> Result<String> {
        self.run_command(&[
            "compute",
            "instance",
            "action",
            "--instance-id",
            id,
            "--action",
            action,
        ])
        .await
    }
}

/// Parse the `{"data": {...}}` envelope oci prints for a single instance
pub fn parse_instance(output: &str) -> Result<InstanceInfo> {
    if output.trim().is_empty() {
        return Err(OciError::UnexpectedOutput("empty response".to_string()));
    }
    let response: OciResponse<InstanceInfo> = serde_json::from_str(output)?;
    Ok(response.data)
}

/// Response envelope of the oci CLI
#[derive(Debug, Clone, Deserialize)]
pub struct OciResponse<T> {
    pub data: T,
}

/// Compute instance as reported by oci
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceInfo {
    pub id: String,

    #[serde(rename = "display-name")]
    pub display_name: String,

    #[serde(rename = "lifecycle-state")]
    pub lifecycle_state: String,
}
