//! # VSP Host - Application Layer
//!
//! Turns provider bindings into live provider instances.
//!
//! - [`ports::registry`] - link-time provider registration, discovery,
//!   instantiation and resolution
//! - [`ports::admin`] - metrics port read by the status endpoint

pub mod ports;

pub use ports::registry::{
    Capability, CandidateSet, ProviderEntry, STORAGE_PROVIDERS, find_implementors, instantiate,
    list_providers, list_storage_providers, resolve_provider, resolve_storage_provider,
};
