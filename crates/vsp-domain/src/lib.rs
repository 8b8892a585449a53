//! # VSP Host - Domain Layer
//!
//! Core contracts shared by every other crate in the workspace:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | Response-aware failure taxonomy |
//! | [`ports`] | Capability contracts implemented by storage providers |
//! | [`value_objects`] | Provider bindings, settings and descriptors |
//! | [`constants`] | Status codes and schema version |
//!
//! The domain layer has no knowledge of concrete providers, configuration
//! sources or the HTTP boundary.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Fault, ResolutionFailure, Result};
pub use ports::providers::StorageProvider;
pub use value_objects::{ProviderBinding, ProviderDescriptor, ProviderSettings, StorageStats};
