//! Provider factory
//!
//! Resolves a binding to exactly one registered provider and constructs it.
//!
//! ```text
//! Start ─▶ Candidate Lookup ─▶ Resolve ─┬─ 0 matches  ─▶ UnknownKind (404)
//!                                       ├─ >1 matches ─▶ AmbiguousKind (500)
//!                                       └─ 1 match    ─▶ Construct ─▶ Done
//! ```
//!
//! Resolution is synchronous and holds no lock beyond the discovery read
//! guard. No timeout is applied to construction; callers whose providers may
//! block in their factory should wrap resolution in their own timeout.

use std::sync::Arc;

use tracing::{error, info, warn};
use vsp_domain::error::{Error, Result};
use vsp_domain::value_objects::{ProviderBinding, ProviderDescriptor};

use super::discovery::find_implementors;
use super::entry::Capability;
use super::instantiate::instantiate;

/// Resolve a binding to a live provider implementing contract `C`
///
/// # Errors
///
/// - [`Error::ProviderResolution`] with an unknown-kind reason when no
///   registered provider declares `binding.kind`
/// - [`Error::ProviderResolution`] with an ambiguous-kind reason when more
///   than one does
/// - [`Error::Instantiation`] from [`instantiate`], passed through unchanged
pub fn resolve_provider<C: Capability + ?Sized>(binding: &ProviderBinding) -> Result<Arc<C>> {
    let candidates = find_implementors::<C>();

    match candidates.with_kind(&binding.kind) {
        [] => {
            warn!(
                contract = C::CONTRACT,
                slot = %binding.slot,
                kind = %binding.kind,
                "No registered provider for kind"
            );
            Err(Error::unknown_provider_kind(
                binding.kind.clone(),
                candidates.kinds(),
            ))
        }
        [entry] => {
            let instance = instantiate(entry, &binding.settings)?;
            info!(
                contract = C::CONTRACT,
                slot = %binding.slot,
                kind = entry.kind,
                module = entry.module,
                "Resolved provider"
            );
            Ok(instance)
        }
        conflicting => {
            let mut modules: Vec<String> =
                conflicting.iter().map(|e| e.module.to_string()).collect();
            modules.sort();
            error!(
                contract = C::CONTRACT,
                slot = %binding.slot,
                kind = %binding.kind,
                modules = ?modules,
                "Provider kind registered more than once"
            );
            Err(Error::ambiguous_provider_kind(binding.kind.clone(), modules))
        }
    }
}

/// List all providers registered for contract `C`
///
/// Sorted by kind then module. Useful for CLI help and the admin API.
pub fn list_providers<C: Capability + ?Sized>() -> Vec<ProviderDescriptor> {
    let mut providers: Vec<ProviderDescriptor> = find_implementors::<C>()
        .iter()
        .map(|entry| entry.descriptor())
        .collect();
    providers.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.module.cmp(&b.module)));
    providers
}
