//! Filesystem storage provider
//!
//! Layout under the configured root:
//!
//! ```text
//! <root>/
//! ├── <collection>/
//! │   ├── <document id>.doc
//! │   └── ...
//! └── ...
//! ```
//!
//! Construction touches the disk only when `create_if_missing` is set;
//! otherwise directories are created on first write.

mod config;

pub use config::FilesystemStorageConfig;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use vsp_application::ports::registry::{ProviderEntry, STORAGE_PROVIDERS};
use vsp_domain::error::{Error, Result};
use vsp_domain::ports::providers::StorageProvider;
use vsp_domain::value_objects::{ProviderSettings, StorageStats};

use crate::constants::{
    DOCUMENT_FILE_EXTENSION, FILESYSTEM_PROVIDER_KIND, MAX_DOCUMENT_ID_LENGTH, SETTING_ROOT,
};
use crate::utils::{validate_name, validate_name_with_limit};

/// Filesystem storage provider
#[derive(Debug)]
pub struct FilesystemStorageProvider {
    root: PathBuf,
    location: String,
}

impl FilesystemStorageProvider {
    /// Create a provider from its configuration
    pub fn new(config: FilesystemStorageConfig) -> Result<Self> {
        if config.create_if_missing {
            std::fs::create_dir_all(&config.root).map_err(|e| {
                Error::io_with_source(
                    format!("Failed to create storage root {}", config.root.display()),
                    e,
                )
            })?;
        }
        let location = config.root.display().to_string();
        Ok(Self {
            root: config.root,
            location,
        })
    }

    /// Root directory of this provider
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: &str) -> Result<PathBuf> {
        validate_name("collection", collection)?;
        Ok(self.root.join(collection))
    }

    fn document_path(&self, collection: &str, id: &str) -> Result<PathBuf> {
        validate_name_with_limit("document id", id, MAX_DOCUMENT_ID_LENGTH)?;
        Ok(self
            .collection_dir(collection)?
            .join(format!("{}.{}", id, DOCUMENT_FILE_EXTENSION)))
    }

    async fn read_dir_names(&self, dir: &Path, want_dirs: bool) -> Result<Vec<String>> {
        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read directory {}", dir.display()),
                    e,
                ));
            }
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_type = entry.file_type().await?;
            let path = entry.path();
            if want_dirs && file_type.is_dir() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            } else if !want_dirs
                && file_type.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(DOCUMENT_FILE_EXTENSION)
            {
                if let Some(stem) = path.file_stem().and_then(|n| n.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl StorageProvider for FilesystemStorageProvider {
    fn provider_kind(&self) -> &str {
        FILESYSTEM_PROVIDER_KIND
    }

    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }

    async fn create_collection(&self, collection: &str) -> Result<()> {
        let dir = self.collection_dir(collection)?;
        fs::create_dir_all(&dir).await.map_err(|e| {
            Error::io_with_source(format!("Failed to create collection {}", dir.display()), e)
        })?;
        debug!(collection = collection, root = %self.location, "Created collection");
        Ok(())
    }

    async fn delete_collection(&self, collection: &str) -> Result<bool> {
        let dir = self.collection_dir(collection)?;
        match fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to delete collection {}", dir.display()),
                e,
            )),
        }
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        self.read_dir_names(&self.root, true).await
    }

    async fn put_document(&self, collection: &str, id: &str, content: Vec<u8>) -> Result<()> {
        let dir = self.collection_dir(collection)?;
        if !fs::try_exists(&dir).await? {
            return Err(Error::not_found(format!("collection '{}'", collection)));
        }
        let path = self.document_path(collection, id)?;
        fs::write(&path, content).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write document {}", path.display()), e)
        })
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Vec<u8>>> {
        let path = self.document_path(collection, id)?;
        match fs::read(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to read document {}", path.display()),
                e,
            )),
        }
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<bool> {
        let path = self.document_path(collection, id)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to delete document {}", path.display()),
                e,
            )),
        }
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<String>> {
        let dir = self.collection_dir(collection)?;
        if !fs::try_exists(&dir).await? {
            return Err(Error::not_found(format!("collection '{}'", collection)));
        }
        self.read_dir_names(&dir, false).await
    }

    async fn stats(&self) -> Result<StorageStats> {
        let collections = self.list_collections().await?;
        let mut documents = 0_u64;
        for collection in &collections {
            documents += self
                .read_dir_names(&self.root.join(collection), false)
                .await?
                .len() as u64;
        }
        Ok(StorageStats::new(collections.len() as u64, documents))
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn filesystem_storage_factory(settings: &ProviderSettings) -> Result<Arc<dyn StorageProvider>> {
    let config = FilesystemStorageConfig::from_settings(settings)?;
    Ok(Arc::new(FilesystemStorageProvider::new(config)?))
}

#[linkme::distributed_slice(STORAGE_PROVIDERS)]
static FILESYSTEM_PROVIDER: ProviderEntry<dyn StorageProvider> = ProviderEntry {
    kind: FILESYSTEM_PROVIDER_KIND,
    description: "Filesystem storage (persistent, one file per document)",
    module: module_path!(),
    required_settings: &[SETTING_ROOT],
    factory: filesystem_storage_factory,
};
