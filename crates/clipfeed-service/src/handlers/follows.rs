//! Follow relation handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use clipfeed_core::{Follow, NewFollow, UserId, Validate};

use super::SuccessResponse;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Follow check result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatus {
    /// Whether the relation exists.
    pub is_following: bool,
}

/// Whether `follower` follows `following`.
pub async fn is_following(
    State(state): State<Arc<AppState>>,
    ApiPath((follower_id, following_id)): ApiPath<(UserId, UserId)>,
) -> Result<Json<FollowStatus>, ApiError> {
    let is_following = state.store.is_following(follower_id, following_id)?;
    Ok(Json(FollowStatus { is_following }))
}

/// Follow a user.
pub async fn create_follow(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewFollow>,
) -> Result<(StatusCode, Json<Follow>), ApiError> {
    body.validate()?;

    let follow = state.store.create_follow(body)?;

    tracing::info!(
        follower_id = %follow.follower_id,
        following_id = %follow.following_id,
        "User followed"
    );
    Ok((StatusCode::CREATED, Json(follow)))
}

/// Unfollow a user. Succeeds even when the relation is absent.
pub async fn delete_follow(
    State(state): State<Arc<AppState>>,
    ApiPath((follower_id, following_id)): ApiPath<(UserId, UserId)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let removed = state.store.delete_follow(follower_id, following_id)?;

    tracing::info!(%follower_id, %following_id, removed, "User unfollowed");
    Ok(Json(SuccessResponse::OK))
}
