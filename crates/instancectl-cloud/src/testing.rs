//! Test doubles shared by the unit tests of this crate

use crate::error::{CloudError, Result};
use crate::provider::Provider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Provider that answers from a fixed state table and records every call
pub struct RecordingProvider {
    slug: String,
    states: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            states: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn shared(slug: &str) -> Arc<dyn Provider> {
        Arc::new(Self::new(slug))
    }

    pub fn with_state(mut self, remote_id: &str, state: &str) -> Self {
        self.states.insert(remote_id.to_string(), state.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Provider for RecordingProvider {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn display_name(&self) -> &str {
        "Recording"
    }

    async fn get_instance_state(&self, remote_id: &str) -> Result<String> {
        self.record(format!("state {}", remote_id));
        self.states
            .get(remote_id)
            .cloned()
            .ok_or_else(|| CloudError::Api(format!("instance {} does not exist", remote_id)))
    }

    async fn perform_instance_action(&self, remote_id: &str, action: &str) -> Result<()> {
        self.record(format!("action {} {}", remote_id, action));
        Ok(())
    }
}
