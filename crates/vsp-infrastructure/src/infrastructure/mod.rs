//! Admin port implementations

pub mod metrics;

pub use metrics::{NullStorageMetrics, SlotMetricsAggregator};
