//! Value objects

pub mod binding;
pub mod provider;

pub use binding::{ProviderBinding, ProviderSettings};
pub use provider::{ProviderDescriptor, StorageStats};
