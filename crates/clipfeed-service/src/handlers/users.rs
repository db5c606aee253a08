//! User profile handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use clipfeed_core::{NewUser, User, UserId, UserPatch, Validate};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Username availability check result.
#[derive(Debug, Serialize)]
pub struct UsernameAvailability {
    /// Whether the handle is free.
    pub available: bool,
    /// The current holder, when taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// List every user.
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.store.get_all_users()?))
}

/// Register a user. `uid`, `username` and `email` must not already be in use.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    body.validate()?;

    let user = state.store.register_user(body)?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by id.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<UserId>,
) -> Result<Json<User>, ApiError> {
    state
        .store
        .get_user(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("user not found: {id}")))
}

/// Get a user by external identity reference.
pub async fn get_user_by_uid(
    State(state): State<Arc<AppState>>,
    ApiPath(uid): ApiPath<String>,
) -> Result<Json<User>, ApiError> {
    state
        .store
        .get_user_by_uid(&uid)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("user not found: {uid}")))
}

/// Check whether a handle is free: 200 with the holder when taken, 404 when
/// available.
pub async fn check_username(
    State(state): State<Arc<AppState>>,
    ApiPath(username): ApiPath<String>,
) -> Result<(StatusCode, Json<UsernameAvailability>), ApiError> {
    let response = match state.store.get_user_by_username(&username)? {
        Some(user) => (
            StatusCode::OK,
            Json(UsernameAvailability {
                available: false,
                user: Some(user),
            }),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(UsernameAvailability {
                available: true,
                user: None,
            }),
        ),
    };
    Ok(response)
}

/// Patch a user profile. A new `username` or `email` must not belong to
/// another user.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<UserId>,
    ApiJson(patch): ApiJson<UserPatch>,
) -> Result<Json<User>, ApiError> {
    patch.validate()?;

    let user = state.store.update_user_profile(id, patch)?;

    tracing::info!(user_id = %id, "User profile updated");
    Ok(Json(user))
}
