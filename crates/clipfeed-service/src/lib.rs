//! Clipfeed HTTP API Service.
//!
//! This crate exposes the clipfeed store over JSON/HTTP:
//!
//! - User profiles and username availability
//! - Videos, the public feed and view counting
//! - Comments, follows and likes
//! - The music catalogue
//! - Creator monetization and withdrawals
//!
//! Every JSON field is camelCase. Errors use a single envelope,
//! `{"error":{"code","message","details"?}}`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers over the sync store are still async for axum

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
