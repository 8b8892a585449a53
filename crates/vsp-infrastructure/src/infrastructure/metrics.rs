//! Storage metrics
//!
//! Real and null implementations of [`StorageMetricsProvider`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use vsp_application::ports::admin::StorageMetricsProvider;
use vsp_domain::error::Result;
use vsp_domain::value_objects::StorageStats;

use crate::di::resolver::ProviderSlots;

/// Sums provider statistics across every bound slot
///
/// Counters are read on demand; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SlotMetricsAggregator {
    slots: Arc<ProviderSlots>,
}

impl SlotMetricsAggregator {
    /// Create an aggregator over the given slots
    pub fn new(slots: Arc<ProviderSlots>) -> Self {
        Self { slots }
    }
}

#[async_trait]
impl StorageMetricsProvider for SlotMetricsAggregator {
    async fn collect(&self) -> Result<StorageStats> {
        let mut total = StorageStats::default();
        for slot in self.slots.iter() {
            let stats = slot.provider.stats().await?;
            debug!(
                slot = %slot.binding.slot,
                collections = stats.collections,
                documents = stats.documents,
                "Collected slot stats"
            );
            total = total + stats;
        }
        Ok(total)
    }
}

/// Reports zero for every counter
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStorageMetrics;

#[async_trait]
impl StorageMetricsProvider for NullStorageMetrics {
    async fn collect(&self) -> Result<StorageStats> {
        Ok(StorageStats::default())
    }
}
