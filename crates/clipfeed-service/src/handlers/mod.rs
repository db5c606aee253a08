//! API handlers.

use serde::Serialize;

pub mod comments;
pub mod follows;
pub mod health;
pub mod likes;
pub mod monetization;
pub mod music;
pub mod users;
pub mod videos;
pub mod withdrawals;

/// Body returned by side-effect-only endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    /// Always `true`; failures use the error envelope.
    pub success: bool,
}

impl SuccessResponse {
    pub(crate) const OK: Self = Self { success: true };
}
