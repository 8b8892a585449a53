//! Filesystem storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vsp_domain::error::Result;
use vsp_domain::value_objects::ProviderSettings;

use crate::constants::{SETTING_CREATE_IF_MISSING, SETTING_ROOT};

/// Filesystem storage provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemStorageConfig {
    /// Directory holding one sub-directory per collection
    pub root: PathBuf,
    /// Create `root` when the provider is constructed
    pub create_if_missing: bool,
}

impl FilesystemStorageConfig {
    /// Create a config for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            create_if_missing: false,
        }
    }

    /// Build from binding settings (`root` required, `create_if_missing` optional)
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self> {
        Ok(Self {
            root: PathBuf::from(settings.require_str(SETTING_ROOT)?),
            create_if_missing: settings
                .get_bool(SETTING_CREATE_IF_MISSING)?
                .unwrap_or(false),
        })
    }
}
