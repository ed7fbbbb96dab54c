//! コマンドハンドラのテスト用ヘルパー

use async_trait::async_trait;
use instancectl_cloud::{
    CloudError, FileSystemDriver, InstanceFactory, InstanceRegistry, Provider, RegistryConfig,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 固定の状態を返し、呼び出しを記録するプロバイダー
pub struct FakeProvider {
    states: HashMap<String, String>,
    pub actions: Mutex<Vec<(String, String)>>,
}

impl FakeProvider {
    pub fn new(states: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            states: states
                .iter()
                .map(|(id, state)| (id.to_string(), state.to_string()))
                .collect(),
            actions: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Provider for FakeProvider {
    fn slug(&self) -> &str {
        "fake"
    }

    fn display_name(&self) -> &str {
        "Fake"
    }

    async fn get_instance_state(&self, remote_id: &str) -> instancectl_cloud::Result<String> {
        self.states
            .get(remote_id)
            .cloned()
            .ok_or_else(|| CloudError::Api(format!("NotAuthorizedOrNotFound: {}", remote_id)))
    }

    async fn perform_instance_action(
        &self,
        remote_id: &str,
        action: &str,
    ) -> instancectl_cloud::Result<()> {
        self.actions
            .lock()
            .unwrap()
            .push((remote_id.to_string(), action.to_string()));
        Ok(())
    }
}

pub fn registry(store: &Path, provider: Arc<FakeProvider>) -> InstanceRegistry {
    let factory = InstanceFactory::new([provider as Arc<dyn Provider>]).unwrap();
    InstanceRegistry::new(RegistryConfig::new(FileSystemDriver::new(store), factory))
}

pub fn output(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}
