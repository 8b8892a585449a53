//! Shared handler state

use std::sync::Arc;

use vsp_application::ports::admin::StorageMetricsProvider;
use vsp_infrastructure::{AppConfig, AppContext, ProviderSlots};

use crate::constants::UNKNOWN_HOST_NAME;

/// State managed by Rocket and read by every handler
#[derive(Clone)]
pub struct ApiState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Storage providers bound to their slots
    pub slots: Arc<ProviderSlots>,
    /// Storage counters
    pub metrics: Arc<dyn StorageMetricsProvider>,
    /// Host name reported by `/config`
    pub host_name: String,
}

impl ApiState {
    /// Build handler state from the application context
    pub fn from_context(context: &AppContext) -> Self {
        Self {
            config: Arc::clone(&context.config),
            slots: Arc::clone(&context.slots),
            metrics: Arc::clone(&context.metrics),
            host_name: local_host_name(),
        }
    }

    /// Override the reported host name
    pub fn with_host_name(mut self, host_name: impl Into<String>) -> Self {
        self.host_name = host_name.into();
        self
    }
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("host_name", &self.host_name)
            .field("slots", &self.slots.len())
            .finish()
    }
}

fn local_host_name() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| UNKNOWN_HOST_NAME.to_string())
}
