//! # VSP Host - Provider Implementations
//!
//! User-selectable storage providers. Each provider implements the
//! `StorageProvider` contract from `vsp-domain` and registers itself with
//! the registry in `vsp-application` under its kind string.
//!
//! | Kind | Provider | Description |
//! |------|----------|-------------|
//! | `null` | [`storage::NullStorageProvider`] | Accepts writes, stores nothing |
//! | `memory` | [`storage::MemoryStorageProvider`] | Concurrent in-memory maps |
//! | `filesystem` | [`storage::FilesystemStorageProvider`] | Directories and files under `root` |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! vsp-providers = { version = "0.1", default-features = false, features = ["storage-memory"] }
//! ```
//!
//! Binaries must reference this crate (`extern crate vsp_providers;`) so the
//! linker keeps the registrations.

pub use vsp_domain::error::{Error, Result};
pub use vsp_domain::ports::providers::StorageProvider;

/// Provider-specific constants
pub mod constants;

/// Storage provider implementations
pub mod storage;

/// Shared utilities for provider implementations
pub mod utils;
