//! Shared utilities for provider implementations

pub mod names;

pub use names::{validate_name, validate_name_with_limit};
