//! Comment handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use clipfeed_core::{Comment, NewComment, Validate};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Post a comment. The video's comment counter follows.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewComment>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    body.validate()?;

    let comment = state.store.create_comment(body)?;

    tracing::info!(
        comment_id = %comment.id,
        video_id = %comment.video_id,
        user_id = %comment.user_id,
        "Comment posted"
    );
    Ok((StatusCode::CREATED, Json(comment)))
}
