//! Instance reconstruction from persisted records

use crate::error::{CloudError, Result};
use crate::instance::{Instance, InstanceRecord};
use crate::provider::Provider;
use std::collections::HashMap;
use std::sync::Arc;

/// Builds [`Instance`]s by resolving a record's provider slug
/// against the providers configured for this process.
pub struct InstanceFactory {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl InstanceFactory {
    /// Build the slug lookup table. Fails if two providers share a slug.
    pub fn new(providers: impl IntoIterator<Item = Arc<dyn Provider>>) -> Result<Self> {
        let mut table = HashMap::new();
        for provider in providers {
            let slug = provider.slug().to_string();
            if table.contains_key(&slug) {
                return Err(CloudError::DuplicateProvider(slug));
            }
            tracing::debug!("Registered provider: {}", slug);
            table.insert(slug, provider);
        }
        Ok(Self { providers: table })
    }

    pub fn create(&self, record: &InstanceRecord) -> Result<Instance> {
        let provider = self
            .providers
            .get(&record.provider)
            .ok_or_else(|| CloudError::UnknownProvider(record.provider.clone()))?;
        Ok(Instance::new(Arc::clone(provider), &record.id))
    }

    pub fn provider(&self, slug: &str) -> Option<&dyn Provider> {
        self.providers.get(slug).map(|p| p.as_ref())
    }

    /// Configured slugs, sorted
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs
    }
}
