//! Capability discovery
//!
//! Enumerates the providers registered for a contract. The result for each
//! contract is indexed by kind once and memoised for the process lifetime:
//! linkme slices are fixed at link time, so the index never goes stale.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use super::entry::{Capability, ProviderEntry};

type IndexCache = RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>;

static DISCOVERY_INDEX: OnceLock<IndexCache> = OnceLock::new();

/// Providers registered for contract `C`
///
/// Behaves as a set: iteration order carries no meaning and callers must
/// not depend on it.
pub struct CandidateSet<C: ?Sized + 'static> {
    inner: Arc<CandidateIndex<C>>,
}

struct CandidateIndex<C: ?Sized + 'static> {
    all: Vec<&'static ProviderEntry<C>>,
    by_kind: HashMap<&'static str, Vec<&'static ProviderEntry<C>>>,
}

impl<C: ?Sized + 'static> CandidateIndex<C> {
    fn build(entries: &'static [ProviderEntry<C>]) -> Self {
        let mut by_kind: HashMap<&'static str, Vec<&'static ProviderEntry<C>>> = HashMap::new();
        for entry in entries {
            by_kind.entry(entry.kind).or_default().push(entry);
        }
        Self {
            all: entries.iter().collect(),
            by_kind,
        }
    }
}

impl<C: ?Sized + 'static> CandidateSet<C> {
    /// Number of registered candidates
    pub fn len(&self) -> usize {
        self.inner.all.len()
    }

    /// Whether no candidate is registered
    pub fn is_empty(&self) -> bool {
        self.inner.all.is_empty()
    }

    /// Iterate over every candidate
    pub fn iter(&self) -> impl Iterator<Item = &'static ProviderEntry<C>> + '_ {
        self.inner.all.iter().copied()
    }

    /// Whether any candidate declares `kind`
    pub fn contains_kind(&self, kind: &str) -> bool {
        self.inner.by_kind.contains_key(kind)
    }

    /// Candidates declaring exactly `kind`
    pub fn with_kind(&self, kind: &str) -> &[&'static ProviderEntry<C>] {
        self.inner
            .by_kind
            .get(kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct registered kinds, sorted
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.inner.by_kind.keys().map(|k| k.to_string()).collect();
        kinds.sort();
        kinds
    }
}

impl<C: ?Sized + 'static> Clone for CandidateSet<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: ?Sized + 'static> std::fmt::Debug for CandidateSet<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateSet")
            .field("kinds", &self.kinds())
            .field("len", &self.len())
            .finish()
    }
}

/// Find every provider registered for contract `C`
///
/// Never instantiates anything and never fails; an empty set is a valid
/// answer. The first call per contract builds the index under the write
/// guard, later calls only take the read guard.
pub fn find_implementors<C: Capability + ?Sized>() -> CandidateSet<C> {
    let cache = DISCOVERY_INDEX.get_or_init(|| RwLock::new(HashMap::new()));
    let key = TypeId::of::<C>();

    if let Some(set) = cached::<C>(&cache.read().unwrap_or_else(PoisonError::into_inner), key) {
        return set;
    }

    let mut guard = cache.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = cached::<C>(&guard, key) {
        return set;
    }

    let index = Arc::new(CandidateIndex::build(C::registered()));
    debug!(
        contract = C::CONTRACT,
        candidates = index.all.len(),
        "Indexed registered providers"
    );
    guard.insert(key, Box::new(Arc::clone(&index)));
    CandidateSet { inner: index }
}

fn cached<C: ?Sized + 'static>(
    map: &HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    key: TypeId,
) -> Option<CandidateSet<C>> {
    map.get(&key)
        .and_then(|boxed| boxed.downcast_ref::<Arc<CandidateIndex<C>>>())
        .map(|index| CandidateSet {
            inner: Arc::clone(index),
        })
}
