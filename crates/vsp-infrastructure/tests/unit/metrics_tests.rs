//! Storage metrics tests

use std::sync::Arc;

use vsp_application::ports::admin::StorageMetricsProvider;
use vsp_domain::value_objects::{ProviderBinding, StorageStats};
use vsp_infrastructure::ProviderSlots;
use vsp_infrastructure::infrastructure::{NullStorageMetrics, SlotMetricsAggregator};

#[tokio::test]
async fn test_aggregates_across_slots() {
    let slots = Arc::new(
        ProviderSlots::resolve(&[
            ProviderBinding::new("a", "memory"),
            ProviderBinding::new("b", "memory"),
            ProviderBinding::new("c", "null"),
        ])
        .unwrap(),
    );

    let a = slots.get("a").unwrap();
    a.create_collection("docs").await.unwrap();
    a.put_document("docs", "one", b"1".to_vec()).await.unwrap();
    a.put_document("docs", "two", b"2".to_vec()).await.unwrap();

    let b = slots.get("b").unwrap();
    b.create_collection("logs").await.unwrap();
    b.create_collection("tmp").await.unwrap();
    b.put_document("logs", "x", b"x".to_vec()).await.unwrap();

    let metrics = SlotMetricsAggregator::new(slots);
    assert_eq!(metrics.collect().await.unwrap(), StorageStats::new(3, 3));
}

#[tokio::test]
async fn test_null_metrics_reports_zero() {
    assert_eq!(
        NullStorageMetrics.collect().await.unwrap(),
        StorageStats::default()
    );
}
