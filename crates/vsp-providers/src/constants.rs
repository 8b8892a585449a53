//! Provider-specific constants

/// Kind of the no-op provider
pub const NULL_PROVIDER_KIND: &str = "null";

/// Kind of the in-memory provider
pub const MEMORY_PROVIDER_KIND: &str = "memory";

/// Kind of the filesystem provider
pub const FILESYSTEM_PROVIDER_KIND: &str = "filesystem";

/// Setting naming the filesystem root directory
pub const SETTING_ROOT: &str = "root";

/// Setting asking the filesystem provider to create its root on construction
pub const SETTING_CREATE_IF_MISSING: &str = "create_if_missing";

/// Setting capping the number of documents held by the memory provider
pub const SETTING_MAX_DOCUMENTS: &str = "max_documents";

/// File extension used for stored documents
pub const DOCUMENT_FILE_EXTENSION: &str = "doc";

/// Maximum length of collection names and document ids
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum document id length for the filesystem provider, leaving room for
/// the `.` and [`DOCUMENT_FILE_EXTENSION`] appended to the file name
pub const MAX_DOCUMENT_ID_LENGTH: usize = MAX_NAME_LENGTH - 1 - DOCUMENT_FILE_EXTENSION.len();
