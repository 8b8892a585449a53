//! Configuration management
//!
//! Layered configuration (defaults → TOML file → `VSP_` environment) loaded
//! with figment. Provider bindings are consumed as an ordered list.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{ApiConfig, AppConfig, LoggingConfig, ServerConfig};
