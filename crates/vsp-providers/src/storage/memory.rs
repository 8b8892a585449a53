//! In-memory storage provider
//!
//! Keeps collections and documents in concurrent maps. Data is not persisted
//! and is lost on restart.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use vsp_application::ports::registry::{ProviderEntry, STORAGE_PROVIDERS};
use vsp_domain::error::{Error, Result};
use vsp_domain::ports::providers::StorageProvider;
use vsp_domain::value_objects::{ProviderSettings, StorageStats};

use crate::constants::{MEMORY_PROVIDER_KIND, SETTING_MAX_DOCUMENTS};
use crate::utils::validate_name;

/// In-memory storage provider
pub struct MemoryStorageProvider {
    collections: DashMap<String, BTreeMap<String, Vec<u8>>>,
    documents: AtomicU64,
    max_documents: Option<u64>,
}

impl MemoryStorageProvider {
    /// Create an unbounded in-memory provider
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
            documents: AtomicU64::new(0),
            max_documents: None,
        }
    }

    /// Cap the total number of stored documents
    pub fn with_max_documents(mut self, max_documents: u64) -> Self {
        self.max_documents = Some(max_documents);
        self
    }

    /// Build from binding settings (`max_documents` is optional)
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self> {
        let provider = Self::new();
        Ok(match settings.get_u64(SETTING_MAX_DOCUMENTS)? {
            Some(max) => provider.with_max_documents(max),
            None => provider,
        })
    }
}

impl MemoryStorageProvider {
    // Check and increment happen in one atomic step so concurrent puts into
    // different collections cannot overshoot the cap.
    fn reserve_document_slot(&self) -> Result<()> {
        match self.max_documents {
            None => {
                self.documents.fetch_add(1, Ordering::AcqRel);
                Ok(())
            }
            Some(max) => self
                .documents
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                    (count < max).then_some(count + 1)
                })
                .map(|_| ())
                .map_err(|_| {
                    Error::storage(format!("memory provider is full ({} documents)", max))
                }),
        }
    }
}

impl Default for MemoryStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageProvider for MemoryStorageProvider {
    fn provider_kind(&self) -> &str {
        MEMORY_PROVIDER_KIND
    }

    async fn create_collection(&self, collection: &str) -> Result<()> {
        validate_name("collection", collection)?;
        self.collections.entry(collection.to_string()).or_default();
        Ok(())
    }

    async fn delete_collection(&self, collection: &str) -> Result<bool> {
        match self.collections.remove(collection) {
            Some((_, docs)) => {
                self.documents
                    .fetch_sub(docs.len() as u64, Ordering::Relaxed);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.collections.iter().map(|e| e.key().clone()).collect();
        names.sort();
        Ok(names)
    }

    async fn put_document(&self, collection: &str, id: &str, content: Vec<u8>) -> Result<()> {
        validate_name("document id", id)?;
        let mut docs = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| Error::not_found(format!("collection '{}'", collection)))?;

        let reserved = !docs.contains_key(id);
        if reserved {
            self.reserve_document_slot()?;
        }
        if docs.insert(id.to_string(), content).is_some() && reserved {
            self.documents.fetch_sub(1, Ordering::AcqRel);
        }
        Ok(())
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Vec<u8>>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id).cloned()))
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<bool> {
        let removed = self
            .collections
            .get_mut(collection)
            .map(|mut docs| docs.remove(id).is_some())
            .unwrap_or(false);
        if removed {
            self.documents.fetch_sub(1, Ordering::Relaxed);
        }
        Ok(removed)
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<String>> {
        self.collections
            .get(collection)
            .map(|docs| docs.keys().cloned().collect())
            .ok_or_else(|| Error::not_found(format!("collection '{}'", collection)))
    }

    async fn stats(&self) -> Result<StorageStats> {
        Ok(StorageStats::new(
            self.collections.len() as u64,
            self.documents.load(Ordering::Relaxed),
        ))
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn memory_storage_factory(settings: &ProviderSettings) -> Result<Arc<dyn StorageProvider>> {
    Ok(Arc::new(MemoryStorageProvider::from_settings(settings)?))
}

#[linkme::distributed_slice(STORAGE_PROVIDERS)]
static MEMORY_PROVIDER: ProviderEntry<dyn StorageProvider> = ProviderEntry {
    kind: MEMORY_PROVIDER_KIND,
    description: "In-memory storage (fast, non-persistent)",
    module: module_path!(),
    required_settings: &[],
    factory: memory_storage_factory,
};
