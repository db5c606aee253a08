//! Music catalogue handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use clipfeed_core::{Music, MusicId, NewMusic, Validate};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// List the catalogue.
pub async fn list_music(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Music>>, ApiError> {
    Ok(Json(state.store.get_all_music()?))
}

/// Get one track.
pub async fn get_music(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<MusicId>,
) -> Result<Json<Music>, ApiError> {
    state
        .store
        .get_music(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("music not found: {id}")))
}

/// Add a track.
pub async fn create_music(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewMusic>,
) -> Result<(StatusCode, Json<Music>), ApiError> {
    body.validate()?;

    let music = state.store.create_music(body)?;

    tracing::info!(music_id = %music.id, title = %music.title, "Track added");
    Ok((StatusCode::CREATED, Json(music)))
}
