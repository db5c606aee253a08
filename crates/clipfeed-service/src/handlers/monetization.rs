//! Creator monetization handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use clipfeed_core::{Monetization, MonetizationPatch, NewMonetization, UserId, Validate};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Get a creator's monetization row.
pub async fn get_monetization(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Json<Monetization>, ApiError> {
    state
        .store
        .get_monetization(user_id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("monetization not found: {user_id}")))
}

/// Enable monetization for a creator. One row per creator.
pub async fn create_monetization(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewMonetization>,
) -> Result<(StatusCode, Json<Monetization>), ApiError> {
    body.validate()?;

    let row = state.store.enable_monetization(body)?;

    tracing::info!(user_id = %row.user_id, "Monetization enabled");
    Ok((StatusCode::CREATED, Json(row)))
}

/// Patch a creator's monetization settings or earnings.
pub async fn update_monetization(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<UserId>,
    ApiJson(patch): ApiJson<MonetizationPatch>,
) -> Result<Json<Monetization>, ApiError> {
    patch.validate()?;

    let row = state.store.update_monetization(user_id, patch)?;

    tracing::info!(%user_id, "Monetization updated");
    Ok(Json(row))
}
