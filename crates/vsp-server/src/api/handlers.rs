//! Route handlers

use rocket::serde::json::Json;
use rocket::{State, get};
use tracing::debug;
use vsp_application::list_storage_providers;

use super::error::ApiError;
use super::models::{
    CollectionListResponse, ConfigurationResponse, HealthResponse, ProviderInfo,
    ProviderListResponse, build_configuration_response,
};
use crate::constants::HEALTHY_STATUS;
use crate::state::ApiState;

/// Health check endpoint
#[get("/health")]
pub fn health(state: &State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY_STATUS.to_string(),
        slots: state.slots.len(),
    })
}

/// Host identity, bound slots and storage counters
#[get("/config")]
pub async fn get_configuration(
    state: &State<ApiState>,
) -> Result<Json<ConfigurationResponse>, ApiError> {
    let response = build_configuration_response(state.inner())
        .await
        .map_err(|e| ApiError::new(e, "config"))?;
    Ok(Json(response))
}

/// Registered storage providers
#[get("/providers")]
pub fn list_providers() -> Json<ProviderListResponse> {
    let providers: Vec<ProviderInfo> = list_storage_providers()
        .into_iter()
        .map(ProviderInfo::from)
        .collect();
    let total = providers.len();
    Json(ProviderListResponse { providers, total })
}

/// Collections held by the provider bound to `slot`
#[get("/slots/<slot>/collections")]
pub async fn list_slot_collections(
    state: &State<ApiState>,
    slot: &str,
) -> Result<Json<CollectionListResponse>, ApiError> {
    let source = format!("slots/{}", slot);
    let provider = state
        .slots
        .get(slot)
        .map_err(|e| ApiError::new(e, source.clone()))?;

    let collections = provider
        .list_collections()
        .await
        .map_err(|e| ApiError::new(e, source))?;
    debug!(slot, count = collections.len(), "Listed collections");

    let total = collections.len();
    Ok(Json(CollectionListResponse {
        slot: slot.to_string(),
        collections,
        total,
    }))
}
