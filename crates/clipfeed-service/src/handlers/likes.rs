//! Like relation handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use clipfeed_core::{Like, NewLike, UserId, Validate, VideoId};

use super::SuccessResponse;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Like check result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    /// Whether the relation exists.
    pub is_liked: bool,
}

/// Whether a user liked a video.
pub async fn is_liked(
    State(state): State<Arc<AppState>>,
    ApiPath((user_id, video_id)): ApiPath<(UserId, VideoId)>,
) -> Result<Json<LikeStatus>, ApiError> {
    let is_liked = state.store.is_liked(user_id, video_id)?;
    Ok(Json(LikeStatus { is_liked }))
}

/// Like a video.
pub async fn create_like(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewLike>,
) -> Result<(StatusCode, Json<Like>), ApiError> {
    body.validate()?;

    let like = state.store.create_like(body)?;

    tracing::info!(user_id = %like.user_id, video_id = %like.video_id, "Video liked");
    Ok((StatusCode::CREATED, Json(like)))
}

/// Remove a like. Succeeds even when the relation is absent.
pub async fn delete_like(
    State(state): State<Arc<AppState>>,
    ApiPath((user_id, video_id)): ApiPath<(UserId, VideoId)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let removed = state.store.delete_like(user_id, video_id)?;

    tracing::info!(%user_id, %video_id, removed, "Video unliked");
    Ok(Json(SuccessResponse::OK))
}
