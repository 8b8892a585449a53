//! Main application configuration

use serde::{Deserialize, Serialize};
use vsp_domain::constants::{DEFAULT_PROVIDER_KIND, DEFAULT_SLOT, SCHEMA_VERSION};
use vsp_domain::value_objects::ProviderBinding;

pub use super::logging::LoggingConfig;
pub use super::server::ServerConfig;

/// API identity reported by the status endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API version
    pub version: String,
    /// Version of the response schema
    pub schema_version: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// Main application configuration
///
/// ```toml
/// [server]
/// port = 8080
///
/// [[providers]]
/// slot = "archive"
/// kind = "filesystem"
/// settings = { root = "/data", create_if_missing = true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// API identity
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Ordered provider bindings, one per storage slot
    #[serde(default = "default_bindings")]
    pub providers: Vec<ProviderBinding>,
}

fn default_bindings() -> Vec<ProviderBinding> {
    vec![ProviderBinding::new(DEFAULT_SLOT, DEFAULT_PROVIDER_KIND)]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            providers: default_bindings(),
        }
    }
}
