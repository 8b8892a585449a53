//! Storage provider contract
//!
//! The capability every Virtual Storage Provider implements. Collections are
//! named groups of documents; documents are opaque byte payloads addressed
//! by id inside a collection.

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::StorageStats;

/// Storage backend capability contract
///
/// Implementations register themselves with the provider registry under a
/// unique kind string. The kind returned by [`StorageProvider::provider_kind`]
/// must equal the kind the implementation registers with.
///
/// # Example
///
/// ```ignore
/// let provider = resolve_storage_provider(&binding)?;
/// provider.create_collection("invoices").await?;
/// provider.put_document("invoices", "2024-001", b"{}".to_vec()).await?;
/// ```
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Registered kind of this provider (e.g. "filesystem", "memory")
    fn provider_kind(&self) -> &str;

    /// Root path or endpoint the provider writes to, if it has one
    fn location(&self) -> Option<&str> {
        None
    }

    /// Create a collection; creating an existing collection is not an error
    async fn create_collection(&self, collection: &str) -> Result<()>;

    /// Delete a collection and all of its documents
    ///
    /// Returns `false` when the collection did not exist.
    async fn delete_collection(&self, collection: &str) -> Result<bool>;

    /// List collection names, sorted
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// Store a document, replacing any previous content under the same id
    async fn put_document(&self, collection: &str, id: &str, content: Vec<u8>) -> Result<()>;

    /// Fetch a document's content
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Vec<u8>>>;

    /// Delete a document, returning `false` when it did not exist
    async fn delete_document(&self, collection: &str, id: &str) -> Result<bool>;

    /// List document ids in a collection, sorted
    async fn list_documents(&self, collection: &str) -> Result<Vec<String>>;

    /// Point-in-time collection and document counts
    async fn stats(&self) -> Result<StorageStats>;
}
