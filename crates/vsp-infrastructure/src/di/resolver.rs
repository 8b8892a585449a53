//! Provider slot resolution
//!
//! Turns the ordered binding list from configuration into live storage
//! providers, one per named slot.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::{error, info};
use vsp_application::resolve_storage_provider;
use vsp_domain::error::{Error, Result};
use vsp_domain::ports::providers::StorageProvider;
use vsp_domain::value_objects::ProviderBinding;

/// A binding together with the provider it resolved to
#[derive(Clone)]
pub struct ResolvedSlot {
    /// Binding read from configuration
    pub binding: ProviderBinding,
    /// Live provider instance
    pub provider: Arc<dyn StorageProvider>,
}

impl fmt::Debug for ResolvedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedSlot")
            .field("binding", &self.binding)
            .field("provider_kind", &self.provider.provider_kind())
            .finish()
    }
}

/// Live storage providers keyed by slot, in binding order
#[derive(Debug, Clone, Default)]
pub struct ProviderSlots {
    slots: Vec<ResolvedSlot>,
}

impl ProviderSlots {
    /// Resolve every binding in order
    ///
    /// Stops at the first failure and returns it unchanged, so resolution and
    /// instantiation failures keep their status hints.
    pub fn resolve(bindings: &[ProviderBinding]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut slots = Vec::with_capacity(bindings.len());

        for binding in bindings {
            if !seen.insert(binding.slot.as_str()) {
                return Err(Error::configuration(format!(
                    "Slot '{}' is bound more than once",
                    binding.slot
                )));
            }

            let provider = resolve_storage_provider(binding).inspect_err(|e| {
                error!(slot = %binding.slot, kind = %binding.kind, error = %e, "Slot resolution failed");
            })?;

            info!(slot = %binding.slot, kind = %binding.kind, "Slot bound");
            slots.push(ResolvedSlot {
                binding: binding.clone(),
                provider,
            });
        }

        Ok(Self { slots })
    }

    /// Provider bound to `slot`
    pub fn get(&self, slot: &str) -> Result<Arc<dyn StorageProvider>> {
        self.slots
            .iter()
            .find(|s| s.binding.slot == slot)
            .map(|s| Arc::clone(&s.provider))
            .ok_or_else(|| Error::not_found(format!("slot '{}'", slot)))
    }

    /// Bindings in resolution order
    pub fn bindings(&self) -> impl Iterator<Item = &ProviderBinding> {
        self.slots.iter().map(|s| &s.binding)
    }

    /// Resolved slots in binding order
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedSlot> {
        self.slots.iter()
    }

    /// Number of bound slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is bound
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
