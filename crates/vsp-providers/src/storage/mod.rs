//! Storage Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullStorageProvider`] | Testing | No-op stub |
//! | [`MemoryStorageProvider`] | Local | In-memory, non-persistent |
//! | [`FilesystemStorageProvider`] | Local | Persistent, one file per document |

#[cfg(feature = "storage-filesystem")]
pub mod filesystem;
#[cfg(feature = "storage-memory")]
pub mod memory;
pub mod null;

#[cfg(feature = "storage-filesystem")]
pub use filesystem::{FilesystemStorageConfig, FilesystemStorageProvider};
#[cfg(feature = "storage-memory")]
pub use memory::MemoryStorageProvider;
pub use null::NullStorageProvider;
