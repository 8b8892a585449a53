//! Admin ports
//!
//! Interfaces read by the status endpoint. Implementations live in
//! `vsp-infrastructure`.

use async_trait::async_trait;
use vsp_domain::error::Result;
use vsp_domain::value_objects::StorageStats;

/// Source of point-in-time storage counters
#[async_trait]
pub trait StorageMetricsProvider: Send + Sync {
    /// Current collection and document totals
    async fn collect(&self) -> Result<StorageStats>;
}
