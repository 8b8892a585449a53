//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for storage providers.
//! Uses the `linkme` crate for link-time registration of providers
//! that are discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                   Provider Registration Flow                     │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]   │
//! │                        static ENTRY: ProviderEntry<dyn C> = ...  │
//! │                              ↓                                   │
//! │  2. Registry declares: #[linkme::distributed_slice]              │
//! │                        pub static PROVIDERS: [Entry] = [..]      │
//! │                              ↓                                   │
//! │  3. Discovery indexes: find_implementors::<dyn C>()              │
//! │                              ↓                                   │
//! │  4. Binding selects:   kind = "filesystem" → exactly one entry   │
//! │                              ↓                                   │
//! │  5. Instantiation:     entry.factory(&binding.settings)          │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching rule
//!
//! A binding matches an entry when `binding.kind == entry.kind`, compared
//! exactly and case-sensitively. No other attribute (type name, module,
//! description) takes part in matching.
//!
//! ## Usage
//!
//! ### Registering a Provider (in vsp-providers)
//!
//! ```ignore
//! use vsp_application::ports::registry::{ProviderEntry, STORAGE_PROVIDERS};
//!
//! #[linkme::distributed_slice(STORAGE_PROVIDERS)]
//! static MEMORY_PROVIDER: ProviderEntry<dyn StorageProvider> = ProviderEntry {
//!     kind: "memory",
//!     description: "In-memory storage",
//!     module: module_path!(),
//!     required_settings: &[],
//!     factory: |settings| Ok(Arc::new(MemoryStorageProvider::from_settings(settings)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in vsp-infrastructure)
//!
//! ```ignore
//! let binding = ProviderBinding::new("main", "memory");
//! let provider = resolve_storage_provider(&binding)?;
//! ```

pub mod discovery;
pub mod entry;
pub mod factory;
pub mod instantiate;
pub mod storage;

pub use discovery::{CandidateSet, find_implementors};
pub use entry::{Capability, ProviderEntry};
pub use factory::{list_providers, resolve_provider};
pub use instantiate::instantiate;
pub use storage::{STORAGE_PROVIDERS, list_storage_providers, resolve_storage_provider};
