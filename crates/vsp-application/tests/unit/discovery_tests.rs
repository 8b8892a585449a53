//! Tests for discovery, instantiation and resolution against test-only contracts
//!
//! Declares its own contracts and slices so the registered set is fully known.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use vsp_application::ports::registry::{
    Capability, ProviderEntry, find_implementors, instantiate, list_providers, resolve_provider,
};
use vsp_domain::constants::{STATUS_INTERNAL_SERVER_ERROR, STATUS_NOT_FOUND};
use vsp_domain::error::{Error, Result};
use vsp_domain::value_objects::{ProviderBinding, ProviderSettings};
use vsp_domain::{Fault, ResolutionFailure};

// ============================================================================
// Test contract and registrations
// ============================================================================

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

#[linkme::distributed_slice]
static GREETERS: [ProviderEntry<dyn Greeter>] = [..];

impl Capability for dyn Greeter {
    const CONTRACT: &'static str = "Greeter";

    fn registered() -> &'static [ProviderEntry<Self>] {
        &GREETERS
    }
}

struct NamedGreeter {
    name: String,
}

impl Greeter for NamedGreeter {
    fn greet(&self) -> String {
        format!("hello {}", self.name)
    }
}

fn named_factory(settings: &ProviderSettings) -> Result<Arc<dyn Greeter>> {
    let name = settings.require_str("name")?.to_string();
    Ok(Arc::new(NamedGreeter { name }))
}

fn failing_factory(_settings: &ProviderSettings) -> Result<Arc<dyn Greeter>> {
    Err(Error::storage("backend refused connection"))
}

fn prewrapped_factory(_settings: &ProviderSettings) -> Result<Arc<dyn Greeter>> {
    Err(Error::instantiation("prewrapped", "already classified"))
}

fn panicking_factory(_settings: &ProviderSettings) -> Result<Arc<dyn Greeter>> {
    panic!("constructor exploded")
}

#[linkme::distributed_slice(GREETERS)]
static NAMED: ProviderEntry<dyn Greeter> = ProviderEntry {
    kind: "named",
    description: "Greets the configured name",
    module: module_path!(),
    required_settings: &["name"],
    factory: named_factory,
};

#[linkme::distributed_slice(GREETERS)]
static FAILING: ProviderEntry<dyn Greeter> = ProviderEntry {
    kind: "failing",
    description: "Factory always fails",
    module: module_path!(),
    required_settings: &[],
    factory: failing_factory,
};

#[linkme::distributed_slice(GREETERS)]
static PREWRAPPED: ProviderEntry<dyn Greeter> = ProviderEntry {
    kind: "prewrapped",
    description: "Factory fails with an instantiation error",
    module: module_path!(),
    required_settings: &[],
    factory: prewrapped_factory,
};

#[linkme::distributed_slice(GREETERS)]
static PANICKING: ProviderEntry<dyn Greeter> = ProviderEntry {
    kind: "panicking",
    description: "Factory panics",
    module: module_path!(),
    required_settings: &[],
    factory: panicking_factory,
};

mod plugin_a {
    use super::*;

    #[linkme::distributed_slice(GREETERS)]
    static BLOB: ProviderEntry<dyn Greeter> = ProviderEntry {
        kind: "blob",
        description: "First blob greeter",
        module: module_path!(),
        required_settings: &[],
        factory: |_| Ok(Arc::new(NamedGreeter { name: "a".into() }) as Arc<dyn Greeter>),
    };
}

mod plugin_b {
    use super::*;

    #[linkme::distributed_slice(GREETERS)]
    static BLOB: ProviderEntry<dyn Greeter> = ProviderEntry {
        kind: "blob",
        description: "Second blob greeter",
        module: module_path!(),
        required_settings: &[],
        factory: |_| Ok(Arc::new(NamedGreeter { name: "b".into() }) as Arc<dyn Greeter>),
    };
}

trait Unimplemented: Send + Sync {}

#[linkme::distributed_slice]
static UNIMPLEMENTED: [ProviderEntry<dyn Unimplemented>] = [..];

impl Capability for dyn Unimplemented {
    const CONTRACT: &'static str = "Unimplemented";

    fn registered() -> &'static [ProviderEntry<Self>] {
        &UNIMPLEMENTED
    }
}

fn greeter_entry(kind: &str) -> &'static ProviderEntry<dyn Greeter> {
    find_implementors::<dyn Greeter>()
        .with_kind(kind)
        .first()
        .copied()
        .expect("entry should be registered")
}

// ============================================================================
// Capability Discovery
// ============================================================================

#[test]
fn test_find_implementors_returns_exactly_registered_entries() {
    let candidates = find_implementors::<dyn Greeter>();

    assert_eq!(candidates.len(), 6);
    let kinds: BTreeSet<&str> = candidates.iter().map(|e| e.kind).collect();
    let expected: BTreeSet<&str> = ["named", "failing", "prewrapped", "panicking", "blob"]
        .into_iter()
        .collect();
    assert_eq!(kinds, expected);
    assert_eq!(
        candidates.kinds(),
        vec!["blob", "failing", "named", "panicking", "prewrapped"]
    );
}

#[test]
fn test_find_implementors_is_idempotent() {
    let first = find_implementors::<dyn Greeter>();
    let second = find_implementors::<dyn Greeter>();

    let modules = |set: &vsp_application::CandidateSet<dyn Greeter>| {
        set.iter()
            .map(|e| (e.kind, e.module))
            .collect::<BTreeSet<_>>()
    };
    assert_eq!(modules(&first), modules(&second));
    assert_eq!(first.len(), second.len());
}

#[test]
fn test_find_implementors_empty_contract() {
    let candidates = find_implementors::<dyn Unimplemented>();
    assert!(candidates.is_empty());
    assert!(candidates.kinds().is_empty());
    assert!(!candidates.contains_kind("anything"));
}

#[test]
fn test_contracts_do_not_share_candidates() {
    assert!(find_implementors::<dyn Greeter>().contains_kind("named"));
    assert!(!find_implementors::<dyn Unimplemented>().contains_kind("named"));
}

#[test]
fn test_concurrent_discovery() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| find_implementors::<dyn Greeter>().len()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("discovery thread panicked"), 6);
    }
}

// ============================================================================
// Dynamic Instantiation
// ============================================================================

#[test]
fn test_instantiate_forwards_settings() {
    let settings = ProviderSettings::new().with("name", "world");
    let greeter = instantiate(greeter_entry("named"), &settings).expect("should construct");
    assert_eq!(greeter.greet(), "hello world");
}

#[test]
fn test_instantiate_missing_required_setting() {
    let err = instantiate(greeter_entry("named"), &ProviderSettings::new())
        .err()
        .expect("should fail without name");

    assert!(err.is_instantiation_failure());
    assert_eq!(err.status_hint(), Some(STATUS_INTERNAL_SERVER_ERROR));
    assert!(err.to_string().contains("missing required settings: name"));
}

#[test]
fn test_instantiate_incompatible_setting_type() {
    let settings = ProviderSettings::new().with("name", 7);
    let err = instantiate(greeter_entry("named"), &settings)
        .err()
        .expect("should fail with wrong type");

    assert!(err.is_instantiation_failure());
    let source = std::error::Error::source(&err).expect("cause should be wrapped");
    assert!(source.to_string().contains("must be a string"));
}

#[test]
fn test_instantiate_wraps_factory_failure() {
    let err = instantiate(greeter_entry("failing"), &ProviderSettings::new())
        .err()
        .expect("factory fails");

    match &err {
        Error::Instantiation { kind, source, .. } => {
            assert_eq!(kind, "failing");
            let cause = source.as_ref().expect("original error kept as cause");
            assert!(cause.to_string().contains("backend refused connection"));
        }
        other => panic!("Expected Instantiation error, got {:?}", other),
    }
}

#[test]
fn test_instantiate_passes_instantiation_errors_unchanged() {
    let err = instantiate(greeter_entry("prewrapped"), &ProviderSettings::new())
        .err()
        .expect("factory fails");

    match err {
        Error::Instantiation {
            message, source, ..
        } => {
            assert_eq!(message, "already classified");
            assert!(source.is_none());
        }
        other => panic!("Expected Instantiation error, got {:?}", other),
    }
}

#[test]
fn test_instantiate_catches_factory_panic() {
    let err = instantiate(greeter_entry("panicking"), &ProviderSettings::new())
        .err()
        .expect("panic becomes an error");

    assert!(err.is_instantiation_failure());
    assert!(err.to_string().contains("constructor exploded"));

    let source = std::error::Error::source(&err).expect("panic kept as source");
    assert!(source.to_string().contains("constructor exploded"));
}

// ============================================================================
// Provider Factory
// ============================================================================

#[test]
fn test_resolve_single_match() {
    let binding = ProviderBinding::new("greeting", "named").with_setting("name", "vsp");
    let greeter = resolve_provider::<dyn Greeter>(&binding).expect("should resolve");
    assert_eq!(greeter.greet(), "hello vsp");
}

#[test]
fn test_resolve_unknown_kind_is_client_caused() {
    let binding = ProviderBinding::new("greeting", "nonexistent");
    let err = resolve_provider::<dyn Greeter>(&binding)
        .err()
        .expect("unknown kind must fail");

    assert_eq!(err.status_hint(), Some(STATUS_NOT_FOUND));
    assert_eq!(err.fault(), Some(Fault::Client));
    match err {
        Error::ProviderResolution {
            kind,
            reason: ResolutionFailure::UnknownKind { available },
            ..
        } => {
            assert_eq!(kind, "nonexistent");
            assert!(available.contains(&"named".to_string()));
        }
        other => panic!("Expected unknown kind, got {:?}", other),
    }
}

#[test]
fn test_resolve_kind_matching_is_case_sensitive() {
    let binding = ProviderBinding::new("greeting", "Named").with_setting("name", "x");
    let err = resolve_provider::<dyn Greeter>(&binding)
        .err()
        .expect("kind matching is exact");
    assert_eq!(err.status_hint(), Some(STATUS_NOT_FOUND));
}

#[test]
fn test_resolve_ambiguous_kind_is_server_caused() {
    let binding = ProviderBinding::new("objects", "blob");
    let err = resolve_provider::<dyn Greeter>(&binding)
        .err()
        .expect("ambiguous kind must fail");

    assert_eq!(err.status_hint(), Some(STATUS_INTERNAL_SERVER_ERROR));
    assert_eq!(err.fault(), Some(Fault::Server));
    assert!(err.to_string().contains("Ambiguous provider kind 'blob'"));
    match err {
        Error::ProviderResolution {
            reason: ResolutionFailure::AmbiguousKind { modules },
            ..
        } => {
            assert_eq!(modules.len(), 2);
            assert!(modules.iter().any(|m| m.ends_with("plugin_a")));
            assert!(modules.iter().any(|m| m.ends_with("plugin_b")));
        }
        other => panic!("Expected ambiguous kind, got {:?}", other),
    }
}

#[test]
fn test_resolve_does_not_mask_instantiation_failures() {
    let binding = ProviderBinding::new("greeting", "named");
    let err = resolve_provider::<dyn Greeter>(&binding)
        .err()
        .expect("missing setting must fail");

    assert!(err.is_instantiation_failure());
    assert!(!err.is_resolution_failure());
}

#[test]
fn test_resolve_unknown_kind_on_empty_contract() {
    let binding = ProviderBinding::new("slot", "anything");
    let err = resolve_provider::<dyn Unimplemented>(&binding)
        .err()
        .expect("nothing registered");
    assert!(err.is_resolution_failure());
}

#[test]
fn test_list_providers_sorted() {
    let providers = list_providers::<dyn Greeter>();
    let kinds: Vec<&str> = providers.iter().map(|p| p.kind.as_str()).collect();
    assert_eq!(
        kinds,
        vec!["blob", "blob", "failing", "named", "panicking", "prewrapped"]
    );

    let named = providers.iter().find(|p| p.kind == "named").unwrap();
    assert_eq!(named.required_settings, vec!["name".to_string()]);
}
