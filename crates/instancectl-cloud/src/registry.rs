//! Keyed registry of tracked instances
//!
//! The registry maps user-chosen keys to [`Instance`]s and mirrors that map
//! to a [`StorageDriver`] as
//!
//! ```json
//! { "instances": { "<key>": { "id": "<remote id>", "provider": "<slug>" } } }
//! ```
//!
//! Mutations stay in memory until [`InstanceRegistry::write_to_storage`] is
//! called.

use crate::error::{CloudError, Result};
use crate::factory::InstanceFactory;
use crate::instance::{Instance, InstanceRecord};
use crate::provider::InstanceDetails;
use crate::storage::{Restored, StorageDriver};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Dependencies of a registry, supplied once at startup
pub struct RegistryConfig {
    pub driver: Box<dyn StorageDriver>,
    pub factory: InstanceFactory,
}

impl RegistryConfig {
    pub fn new(driver: impl StorageDriver + 'static, factory: InstanceFactory) -> Self {
        Self {
            driver: Box::new(driver),
            factory,
        }
    }
}

/// On-disk shape of the store
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    instances: BTreeMap<String, InstanceRecord>,
}

/// In-memory registry of tracked instances, ordered by key
pub struct InstanceRegistry {
    instances: BTreeMap<String, Instance>,
    driver: Box<dyn StorageDriver>,
    factory: InstanceFactory,
}

impl InstanceRegistry {
    /// Create an empty registry ready for use
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            instances: BTreeMap::new(),
            driver: config.driver,
            factory: config.factory,
        }
    }

    /// Create a registry and populate it from storage
    pub async fn open(config: RegistryConfig) -> Result<Self> {
        let mut registry = Self::new(config);
        registry.load_from_storage().await?;
        Ok(registry)
    }

    /// Track a new instance under `key`
    ///
    /// Fails without touching the registry if `key` is taken or `slug` is not
    /// a configured provider. Nothing is persisted.
    pub fn add_instance(&mut self, slug: &str, remote_id: &str, key: &str) -> Result<&Instance> {
        match self.instances.entry(key.to_string()) {
            Entry::Occupied(_) => Err(CloudError::DuplicateKey(key.to_string())),
            Entry::Vacant(entry) => {
                let instance = self
                    .factory
                    .create(&InstanceRecord::new(slug, remote_id))?;
                tracing::info!(key, provider = slug, remote_id, "Added instance");
                Ok(&*entry.insert(instance))
            }
        }
    }

    /// Iterate over `(key, instance)` pairs in key order
    pub fn list(&self) -> impl Iterator<Item = (&str, &Instance)> + '_ {
        self.instances.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&Instance> {
        self.instances.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.instances.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn factory(&self) -> &InstanceFactory {
        &self.factory
    }

    fn lookup(&self, key: &str) -> Result<&Instance> {
        self.instances
            .get(key)
            .ok_or_else(|| CloudError::KeyNotFound(key.to_string()))
    }

    /// Query the backend state of the instance tracked under `key`
    pub async fn get_state(&self, key: &str) -> Result<String> {
        self.lookup(key)?.state().await
    }

    pub async fn get_details(&self, key: &str) -> Result<InstanceDetails> {
        self.lookup(key)?.details().await
    }

    /// Submit `action` for the instance tracked under `key`
    pub async fn perform_action(&self, key: &str, action: &str) -> Result<()> {
        let instance = self.lookup(key)?;
        tracing::info!(key, action, remote_id = instance.remote_id(), "Performing action");
        instance.perform_action(action).await
    }

    /// Persist every tracked instance
    pub async fn write_to_storage(&self) -> Result<()> {
        let document = StoreDocument {
            instances: self
                .instances
                .iter()
                .map(|(key, instance)| (key.clone(), instance.to_record()))
                .collect(),
        };
        let value = serde_json::to_value(&document)?;
        self.driver.persist(&value).await?;

        tracing::debug!("Saved {} instances", self.instances.len());
        Ok(())
    }

    /// Replace the registry contents with what is in storage
    ///
    /// An empty store leaves the registry empty. A record naming an
    /// unconfigured provider fails the whole load and the current contents
    /// are kept as they were.
    pub async fn load_from_storage(&mut self) -> Result<()> {
        let value = match self.driver.restore().await? {
            Restored::Found(value) => value,
            Restored::NotFound => {
                self.instances.clear();
                return Ok(());
            }
        };

        // serde would also accept a sequence for a struct
        if !value.is_object() {
            return Err(CloudError::InvalidDocument(
                "store document is not a JSON object".to_string(),
            ));
        }
        if value.get("instances").is_none() {
            tracing::warn!("Store has no \"instances\" member, treating it as empty");
        }
        let document: StoreDocument = serde_json::from_value(value)
            .map_err(|e| CloudError::InvalidDocument(e.to_string()))?;

        let instances = document
            .instances
            .into_iter()
            .map(|(key, record)| -> Result<(String, Instance)> {
                Ok((key, self.factory.create(&record)?))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        tracing::debug!("Loaded {} instances", instances.len());
        self.instances = instances;
        Ok(())
    }
}
