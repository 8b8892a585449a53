//! In-memory storage provider tests

use std::sync::Arc;

use tokio::sync::Barrier;
use vsp_domain::Error;
use vsp_domain::ports::providers::StorageProvider;
use vsp_domain::value_objects::{ProviderSettings, StorageStats};
use vsp_providers::storage::MemoryStorageProvider;

#[tokio::test]
async fn test_document_lifecycle() {
    let provider = MemoryStorageProvider::new();
    provider.create_collection("invoices").await.unwrap();

    provider
        .put_document("invoices", "b", b"second".to_vec())
        .await
        .unwrap();
    provider
        .put_document("invoices", "a", b"first".to_vec())
        .await
        .unwrap();

    assert_eq!(
        provider.get_document("invoices", "a").await.unwrap(),
        Some(b"first".to_vec())
    );
    assert_eq!(
        provider.list_documents("invoices").await.unwrap(),
        vec!["a", "b"]
    );
    assert_eq!(provider.stats().await.unwrap(), StorageStats::new(1, 2));

    assert!(provider.delete_document("invoices", "a").await.unwrap());
    assert!(!provider.delete_document("invoices", "a").await.unwrap());
    assert_eq!(provider.stats().await.unwrap(), StorageStats::new(1, 1));

    assert!(provider.delete_collection("invoices").await.unwrap());
    assert_eq!(provider.stats().await.unwrap(), StorageStats::default());
}

#[tokio::test]
async fn test_overwrite_does_not_double_count() {
    let provider = MemoryStorageProvider::new();
    provider.create_collection("c").await.unwrap();
    provider.put_document("c", "x", vec![1]).await.unwrap();
    provider.put_document("c", "x", vec![2]).await.unwrap();

    assert_eq!(provider.stats().await.unwrap().documents, 1);
    assert_eq!(provider.get_document("c", "x").await.unwrap(), Some(vec![2]));
}

#[tokio::test]
async fn test_put_into_missing_collection() {
    let provider = MemoryStorageProvider::new();
    let err = provider
        .put_document("missing", "x", vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_max_documents_from_settings() {
    let settings = ProviderSettings::new().with("max_documents", 1);
    let provider = MemoryStorageProvider::from_settings(&settings).unwrap();
    provider.create_collection("c").await.unwrap();

    provider.put_document("c", "one", vec![]).await.unwrap();
    let err = provider.put_document("c", "two", vec![]).await.unwrap_err();
    assert!(err.to_string().contains("full"));
}

#[test]
fn test_max_documents_rejects_wrong_type() {
    let settings = ProviderSettings::new().with("max_documents", "lots");
    assert!(MemoryStorageProvider::from_settings(&settings).is_err());
}

#[tokio::test]
async fn test_invalid_collection_name() {
    let provider = MemoryStorageProvider::new();
    assert!(provider.create_collection("../escape").await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_max_documents_holds_under_concurrent_puts() {
    const CAP: u64 = 3;
    const WRITERS: usize = 32;

    let provider = Arc::new(MemoryStorageProvider::new().with_max_documents(CAP));
    for i in 0..WRITERS {
        provider.create_collection(&format!("c{i}")).await.unwrap();
    }

    let barrier = Arc::new(Barrier::new(WRITERS));
    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let provider = Arc::clone(&provider);
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                provider
                    .put_document(&format!("c{i}"), "doc", vec![0])
                    .await
                    .is_ok()
            })
        })
        .collect();

    let mut stored = 0;
    for handle in handles {
        if handle.await.unwrap() {
            stored += 1;
        }
    }

    assert_eq!(stored, CAP);
    assert_eq!(provider.stats().await.unwrap().documents, CAP);
}

#[tokio::test]
async fn test_overwrite_at_cap_is_allowed() {
    let provider = MemoryStorageProvider::new().with_max_documents(1);
    provider.create_collection("c").await.unwrap();
    provider.put_document("c", "x", vec![1]).await.unwrap();

    provider.put_document("c", "x", vec![2]).await.unwrap();
    assert_eq!(provider.stats().await.unwrap().documents, 1);
}
