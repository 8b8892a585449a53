//! Provider descriptors and statistics

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Public description of a registered provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    /// Kind string bindings match against
    pub kind: String,
    /// Human-readable description
    pub description: String,
    /// Module that registered the provider
    pub module: String,
    /// Settings the provider cannot be constructed without
    pub required_settings: Vec<String>,
}

/// Collection and document counts reported by a provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageStats {
    /// Number of collections
    pub collections: u64,
    /// Number of documents across all collections
    pub documents: u64,
}

impl StorageStats {
    /// Create stats from raw counts
    pub fn new(collections: u64, documents: u64) -> Self {
        Self {
            collections,
            documents,
        }
    }
}

impl Add for StorageStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            collections: self.collections + other.collections,
            documents: self.documents + other.documents,
        }
    }
}
