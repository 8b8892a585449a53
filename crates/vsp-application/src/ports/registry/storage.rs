//! Storage Provider Registry
//!
//! Registration slice and helpers for the [`StorageProvider`] contract.

use std::sync::Arc;

use vsp_domain::error::Result;
use vsp_domain::ports::providers::StorageProvider;
use vsp_domain::value_objects::{ProviderBinding, ProviderDescriptor};

use super::entry::{Capability, ProviderEntry};
use super::factory::{list_providers, resolve_provider};

// Auto-collection via linkme distributed slices - providers submit entries at link time
#[linkme::distributed_slice]
pub static STORAGE_PROVIDERS: [ProviderEntry<dyn StorageProvider>] = [..];

impl Capability for dyn StorageProvider {
    const CONTRACT: &'static str = "StorageProvider";

    fn registered() -> &'static [ProviderEntry<Self>] {
        &STORAGE_PROVIDERS
    }
}

/// Resolve a storage provider from its binding
///
/// # Example
///
/// ```ignore
/// let binding = ProviderBinding::new("main", "filesystem").with_setting("root", "/data");
/// let provider = resolve_storage_provider(&binding)?;
/// ```
pub fn resolve_storage_provider(binding: &ProviderBinding) -> Result<Arc<dyn StorageProvider>> {
    resolve_provider::<dyn StorageProvider>(binding)
}

/// List all registered storage providers
pub fn list_storage_providers() -> Vec<ProviderDescriptor> {
    list_providers::<dyn StorageProvider>()
}
