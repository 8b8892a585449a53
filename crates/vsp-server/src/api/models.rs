//! API response models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vsp_domain::error::Result;
use vsp_domain::value_objects::{ProviderDescriptor, ProviderSettings, StorageStats};

use crate::constants::{REDACTED_VALUE, SECRET_KEY_MARKERS};
use crate::state::ApiState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Server status
    pub status: String,
    /// Number of bound storage slots
    pub slots: usize,
}

/// One bound slot as reported by `/config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingSummary {
    /// Slot name
    pub slot: String,
    /// Provider kind bound to the slot
    pub kind: String,
    /// Where the provider keeps its data, when it has such a place
    pub location: Option<String>,
    /// Binding settings with secret-looking values redacted
    pub settings: BTreeMap<String, Value>,
}

/// Storage counters summed over every slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    /// Total collections
    pub total_collections: u64,
    /// Total documents
    pub total_documents: u64,
}

impl From<StorageStats> for MetricsSummary {
    fn from(stats: StorageStats) -> Self {
        Self {
            total_collections: stats.collections,
            total_documents: stats.documents,
        }
    }
}

/// Configuration and metrics response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    /// Host the server runs on
    pub host_name: String,
    /// Public endpoint clients should use
    pub endpoint: String,
    /// API version
    pub version: String,
    /// Response schema version
    pub schema_version: String,
    /// Bound slots in configuration order
    pub bindings: Vec<BindingSummary>,
    /// Current storage counters
    pub metrics: MetricsSummary,
}

/// Registered provider as reported by `/providers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    /// Kind bindings match against
    pub kind: String,
    /// Human-readable description
    pub description: String,
    /// Declaring module
    pub module: String,
    /// Settings a binding must supply
    pub required_settings: Vec<String>,
}

impl From<ProviderDescriptor> for ProviderInfo {
    fn from(descriptor: ProviderDescriptor) -> Self {
        Self {
            kind: descriptor.kind,
            description: descriptor.description,
            module: descriptor.module,
            required_settings: descriptor.required_settings,
        }
    }
}

/// Provider list response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderListResponse {
    /// Registered providers sorted by kind
    pub providers: Vec<ProviderInfo>,
    /// Number of providers
    pub total: usize,
}

/// Collection list response for one slot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionListResponse {
    /// Slot queried
    pub slot: String,
    /// Collection names
    pub collections: Vec<String>,
    /// Number of collections
    pub total: usize,
}

/// Assemble the configuration response from current bindings and counters
///
/// Reads only; nothing in the state is modified.
pub async fn build_configuration_response(state: &ApiState) -> Result<ConfigurationResponse> {
    let metrics = state.metrics.collect().await?;

    let bindings = state
        .slots
        .iter()
        .map(|slot| BindingSummary {
            slot: slot.binding.slot.clone(),
            kind: slot.binding.kind.clone(),
            location: slot.provider.location().map(str::to_string),
            settings: redact_settings(&slot.binding.settings),
        })
        .collect();

    Ok(ConfigurationResponse {
        host_name: state.host_name.clone(),
        endpoint: state.config.server.public_endpoint(),
        version: state.config.api.version.clone(),
        schema_version: state.config.api.schema_version.clone(),
        bindings,
        metrics: metrics.into(),
    })
}

/// Copy settings, replacing values whose key looks secret
pub fn redact_settings(settings: &ProviderSettings) -> BTreeMap<String, Value> {
    settings
        .iter()
        .map(|(key, value)| {
            let value = if is_secret_key(key) {
                Value::String(REDACTED_VALUE.to_string())
            } else {
                value.clone()
            };
            (key.to_string(), value)
        })
        .collect()
}

fn is_secret_key(key: &str) -> bool {
    let key = key.to_lowercase();
    SECRET_KEY_MARKERS.iter().any(|marker| key.contains(marker))
}
