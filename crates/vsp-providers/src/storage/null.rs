//! Null storage provider for testing
//!
//! A storage provider that accepts every write and stores nothing.

use std::sync::Arc;

use async_trait::async_trait;
use vsp_application::ports::registry::{ProviderEntry, STORAGE_PROVIDERS};
use vsp_domain::error::Result;
use vsp_domain::ports::providers::StorageProvider;
use vsp_domain::value_objects::{ProviderSettings, StorageStats};

use crate::constants::NULL_PROVIDER_KIND;

/// Null storage provider that doesn't store anything
///
/// # Example
///
/// ```rust
/// use vsp_providers::storage::NullStorageProvider;
///
/// let provider = NullStorageProvider::new();
/// // All operations succeed but nothing is kept
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullStorageProvider;

impl NullStorageProvider {
    /// Create a new null storage provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StorageProvider for NullStorageProvider {
    fn provider_kind(&self) -> &str {
        NULL_PROVIDER_KIND
    }

    async fn create_collection(&self, _collection: &str) -> Result<()> {
        Ok(())
    }

    async fn delete_collection(&self, _collection: &str) -> Result<bool> {
        Ok(false)
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn put_document(&self, _collection: &str, _id: &str, _content: Vec<u8>) -> Result<()> {
        Ok(())
    }

    async fn get_document(&self, _collection: &str, _id: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn delete_document(&self, _collection: &str, _id: &str) -> Result<bool> {
        Ok(false)
    }

    async fn list_documents(&self, _collection: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn stats(&self) -> Result<StorageStats> {
        Ok(StorageStats::default())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_storage_factory(_settings: &ProviderSettings) -> Result<Arc<dyn StorageProvider>> {
    Ok(Arc::new(NullStorageProvider::new()))
}

#[linkme::distributed_slice(STORAGE_PROVIDERS)]
static NULL_PROVIDER: ProviderEntry<dyn StorageProvider> = ProviderEntry {
    kind: NULL_PROVIDER_KIND,
    description: "Null storage (accepts writes, stores nothing)",
    module: module_path!(),
    required_settings: &[],
    factory: null_storage_factory,
};
