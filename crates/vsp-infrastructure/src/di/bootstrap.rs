//! Application bootstrap
//!
//! Builds the [`AppContext`] shared by the HTTP layer.

use std::sync::Arc;

use tracing::info;
use vsp_application::ports::admin::StorageMetricsProvider;
use vsp_domain::error::Result;

use crate::config::AppConfig;
use crate::di::resolver::ProviderSlots;
use crate::infrastructure::metrics::SlotMetricsAggregator;

/// Application context: configuration, bound slots and admin services
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Storage providers bound to their slots
    pub slots: Arc<ProviderSlots>,
    /// Storage counters read by the status endpoint
    pub metrics: Arc<dyn StorageMetricsProvider>,
}

impl AppContext {
    /// Resolve every configured binding and wire admin services
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let slots = Arc::new(ProviderSlots::resolve(&config.providers)?);
        let metrics: Arc<dyn StorageMetricsProvider> =
            Arc::new(SlotMetricsAggregator::new(Arc::clone(&slots)));

        info!(slots = slots.len(), "Application context initialized");

        Ok(Self {
            config: Arc::new(config),
            slots,
            metrics,
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("slots", &self.slots)
            .finish()
    }
}

/// Initialize the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    AppContext::initialize(config)
}
