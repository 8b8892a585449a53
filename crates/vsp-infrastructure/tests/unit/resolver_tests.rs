//! Provider slot resolution tests

use vsp_domain::constants::{STATUS_INTERNAL_SERVER_ERROR, STATUS_NOT_FOUND};
use vsp_domain::error::{Error, ResolutionFailure};
use vsp_domain::value_objects::ProviderBinding;
use vsp_infrastructure::config::ConfigBuilder;
use vsp_infrastructure::{AppContext, ProviderSlots};

#[test]
fn test_resolve_bindings_in_order() {
    let bindings = vec![
        ProviderBinding::new("cache", "memory"),
        ProviderBinding::new("sink", "null"),
    ];

    let slots = ProviderSlots::resolve(&bindings).expect("builtin kinds should resolve");

    assert_eq!(slots.len(), 2);
    let order: Vec<&str> = slots.bindings().map(|b| b.slot.as_str()).collect();
    assert_eq!(order, vec!["cache", "sink"]);
    assert_eq!(slots.get("cache").unwrap().provider_kind(), "memory");
    assert_eq!(slots.get("sink").unwrap().provider_kind(), "null");
}

#[test]
fn test_unknown_slot_is_not_found() {
    let slots = ProviderSlots::resolve(&[ProviderBinding::new("default", "memory")]).unwrap();

    let err = slots.get("missing").err().expect("slot should not exist");
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(err.status_hint(), Some(STATUS_NOT_FOUND));
}

#[test]
fn test_unknown_kind_passes_through_unchanged() {
    let bindings = vec![
        ProviderBinding::new("default", "memory"),
        ProviderBinding::new("remote", "s3"),
    ];

    let err = ProviderSlots::resolve(&bindings).unwrap_err();

    match &err {
        Error::ProviderResolution { kind, reason, .. } => {
            assert_eq!(kind, "s3");
            assert!(matches!(reason, ResolutionFailure::UnknownKind { .. }));
        }
        other => panic!("expected resolution failure, got {other:?}"),
    }
    assert_eq!(err.status_hint(), Some(STATUS_NOT_FOUND));
}

#[test]
fn test_missing_setting_surfaces_as_instantiation_failure() {
    let err = ProviderSlots::resolve(&[ProviderBinding::new("archive", "filesystem")]).unwrap_err();

    assert!(err.is_instantiation_failure());
    assert_eq!(err.status_hint(), Some(STATUS_INTERNAL_SERVER_ERROR));
    assert!(err.to_string().contains("root"));
}

#[test]
fn test_duplicate_slot_rejected() {
    let bindings = vec![
        ProviderBinding::new("main", "memory"),
        ProviderBinding::new("main", "null"),
    ];
    let err = ProviderSlots::resolve(&bindings).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_empty_binding_list() {
    let slots = ProviderSlots::resolve(&[]).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn test_app_context_binds_filesystem_location() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().to_string_lossy().into_owned();
    let config = ConfigBuilder::new()
        .with_binding(ProviderBinding::new("archive", "filesystem").with_setting("root", root.clone()))
        .build();

    let context = AppContext::initialize(config).expect("context should initialize");

    assert_eq!(context.slots.len(), 2);
    let archive = context.slots.get("archive").unwrap();
    assert_eq!(archive.location(), Some(root.as_str()));
}
