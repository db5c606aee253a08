//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, patch, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    comments, follows, health, likes, monetization, music, users, videos, withdrawals,
};
use crate::state::AppState;

/// Maximum concurrent requests for API endpoints.
const API_MAX_CONCURRENT_REQUESTS: usize = 100;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Users
/// - `GET /api/users`, `POST /api/users`
/// - `GET /api/users/:id`, `PATCH /api/users/:id`
/// - `GET /api/users/uid/:uid`
/// - `GET /api/users/username/:username` - Availability check
///
/// ## Videos and comments
/// - `GET /api/videos/feed?userId&limit`
/// - `GET /api/videos/user/:user_id`
/// - `GET /api/videos/:id`, `POST /api/videos`
/// - `POST /api/videos/:id/view`
/// - `GET /api/videos/:id/comments`, `POST /api/comments`
///
/// ## Relations
/// - `GET|DELETE /api/follows/:follower_id/:following_id`, `POST /api/follows`
/// - `GET|DELETE /api/likes/:user_id/:video_id`, `POST /api/likes`
///
/// ## Music
/// - `GET /api/music`, `GET /api/music/:id`, `POST /api/music`
///
/// ## Monetization
/// - `GET|PATCH /api/monetization/:user_id`, `POST /api/monetization`
/// - `GET /api/withdrawals/:user_id`, `POST /api/withdrawals`
/// - `PATCH /api/withdrawals/:id/status`
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let api_routes = Router::new()
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user).patch(users::update_user))
        .route("/users/uid/:uid", get(users::get_user_by_uid))
        .route("/users/username/:username", get(users::check_username))
        // Videos
        .route("/videos", post(videos::create_video))
        .route("/videos/feed", get(videos::feed))
        .route("/videos/user/:user_id", get(videos::videos_by_user))
        .route("/videos/:id", get(videos::get_video))
        .route("/videos/:id/view", post(videos::record_view))
        .route("/videos/:id/comments", get(videos::comments_for_video))
        // Comments
        .route("/comments", post(comments::create_comment))
        // Follows
        .route("/follows", post(follows::create_follow))
        .route(
            "/follows/:follower_id/:following_id",
            get(follows::is_following).delete(follows::delete_follow),
        )
        // Likes
        .route("/likes", post(likes::create_like))
        .route(
            "/likes/:user_id/:video_id",
            get(likes::is_liked).delete(likes::delete_like),
        )
        // Music
        .route("/music", get(music::list_music).post(music::create_music))
        .route("/music/:id", get(music::get_music))
        // Monetization
        .route("/monetization", post(monetization::create_monetization))
        .route(
            "/monetization/:user_id",
            get(monetization::get_monetization).patch(monetization::update_monetization),
        )
        // Withdrawals
        .route("/withdrawals", post(withdrawals::create_withdrawal))
        // Both share the `:id` segment name; on the list route it is the owner's user id.
        .route("/withdrawals/:id", get(withdrawals::list_withdrawals))
        .route("/withdrawals/:id/status", patch(withdrawals::update_status))
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        // Health (public, no concurrency limit)
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
