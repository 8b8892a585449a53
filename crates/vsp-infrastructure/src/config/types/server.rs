//! HTTP server configuration types

use crate::constants::{DEFAULT_HTTP_PORT, DEFAULT_SERVER_HOST};
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Public endpoint advertised by the status endpoint
    pub endpoint: Option<String>,
}

impl ServerConfig {
    /// Endpoint clients should use, derived from host and port when unset
    pub fn public_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            endpoint: None,
        }
    }
}
