//! Registry entries and capability contracts

use std::fmt;
use std::sync::Arc;

use vsp_domain::error::Result;
use vsp_domain::value_objects::{ProviderDescriptor, ProviderSettings};

/// A capability contract that providers can register against
///
/// Implemented for `dyn Trait` types. Each contract owns one linkme slice
/// holding every entry registered for it.
pub trait Capability: Send + Sync + 'static {
    /// Contract name used in logs and error messages
    const CONTRACT: &'static str;

    /// Every entry linked into the process for this contract
    fn registered() -> &'static [ProviderEntry<Self>];
}

/// Registry entry for a provider implementing contract `C`
///
/// Each provider registers itself with one entry using
/// `#[linkme::distributed_slice(...)]`. The entry carries the matching key
/// (`kind`), metadata and a typed factory function.
pub struct ProviderEntry<C: ?Sized + 'static> {
    /// Kind string bindings are matched against
    pub kind: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Declaring module, normally `module_path!()`
    pub module: &'static str,
    /// Settings that must be present before the factory is invoked
    pub required_settings: &'static [&'static str],
    /// Factory function creating a provider instance from binding settings
    pub factory: fn(&ProviderSettings) -> Result<Arc<C>>,
}

impl<C: ?Sized + 'static> ProviderEntry<C> {
    /// Public descriptor of this entry
    pub fn descriptor(&self) -> ProviderDescriptor {
        ProviderDescriptor {
            kind: self.kind.to_string(),
            description: self.description.to_string(),
            module: self.module.to_string(),
            required_settings: self
                .required_settings
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl<C: ?Sized + 'static> fmt::Debug for ProviderEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("kind", &self.kind)
            .field("module", &self.module)
            .field("required_settings", &self.required_settings)
            .finish()
    }
}
