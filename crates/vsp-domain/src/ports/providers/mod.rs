//! Provider capability contracts

pub mod storage;

pub use storage::StorageProvider;
