//! Video and feed handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use clipfeed_core::{Comment, NewVideo, UserId, Validate, Video, VideoId, VideoStat};

use super::SuccessResponse;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Query parameters for the feed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    /// Requesting user. Accepted but the feed is the same for everyone.
    pub user_id: Option<UserId>,
    /// Maximum number of videos (default 20, clamped to the configured bound).
    pub limit: Option<usize>,
}

/// Public videos, newest first.
pub async fn feed(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<FeedQuery>,
) -> Result<Json<Vec<Video>>, ApiError> {
    let limit = state.feed_limit(query.limit);
    Ok(Json(state.store.get_feed_videos(query.user_id, limit)?))
}

/// Videos owned by a user.
pub async fn videos_by_user(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Json<Vec<Video>>, ApiError> {
    Ok(Json(state.store.get_videos_by_user(user_id)?))
}

/// Get one video.
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<VideoId>,
) -> Result<Json<Video>, ApiError> {
    state
        .store
        .get_video(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("video not found: {id}")))
}

/// Publish a video.
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewVideo>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    body.validate()?;

    let video = state.store.create_video(body)?;

    tracing::info!(
        video_id = %video.id,
        user_id = %video.user_id,
        is_public = video.is_public,
        "Video published"
    );
    Ok((StatusCode::CREATED, Json(video)))
}

/// Count a view. Unknown videos are ignored.
pub async fn record_view(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<VideoId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.store.update_video_stats(id, VideoStat::Views)?;
    Ok(Json(SuccessResponse::OK))
}

/// Comments on a video, newest first.
pub async fn comments_for_video(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<VideoId>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    Ok(Json(state.store.get_comments_by_video(id)?))
}
