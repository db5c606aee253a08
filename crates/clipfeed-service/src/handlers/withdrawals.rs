//! Withdrawal handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use clipfeed_core::{NewWithdrawal, UserId, Validate, Withdrawal, WithdrawalId, WithdrawalStatus};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Status update request.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status.
    pub status: WithdrawalStatus,
}

/// A creator's withdrawals, newest first.
pub async fn list_withdrawals(
    State(state): State<Arc<AppState>>,
    ApiPath(user_id): ApiPath<UserId>,
) -> Result<Json<Vec<Withdrawal>>, ApiError> {
    Ok(Json(state.store.get_withdrawals_by_user(user_id)?))
}

/// Request a payout. Always starts as `pending`.
pub async fn create_withdrawal(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewWithdrawal>,
) -> Result<(StatusCode, Json<Withdrawal>), ApiError> {
    body.validate()?;

    let withdrawal = state.store.create_withdrawal(body)?;

    tracing::info!(
        withdrawal_id = %withdrawal.id,
        user_id = %withdrawal.user_id,
        amount = withdrawal.amount,
        method = %withdrawal.method,
        "Withdrawal requested"
    );
    Ok((StatusCode::CREATED, Json(withdrawal)))
}

/// Move a withdrawal along `pending → completed | failed`.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<WithdrawalId>,
    ApiJson(body): ApiJson<UpdateStatusRequest>,
) -> Result<Json<Withdrawal>, ApiError> {
    let withdrawal = state.store.transition_withdrawal(id, body.status)?;

    tracing::info!(withdrawal_id = %id, status = %withdrawal.status, "Withdrawal status updated");
    Ok(Json(withdrawal))
}
