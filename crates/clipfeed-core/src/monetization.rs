//! Creator monetization and withdrawal types.
//!
//! Earnings are simulated; nothing here moves real money.
//!
//! # Currency Unit
//!
//! All amounts are integer minor-currency units (cents), stored as `i64` to
//! avoid floating point precision issues. Engagement rate is a percentage
//! multiplied by 100 (`750` = 7.50%).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::{NewMonetization, NewWithdrawal};
use crate::{MonetizationId, UserId, WithdrawalId};

/// Monetization settings and earnings for one creator.
///
/// At most one row exists per user; the store keys the collection by `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monetization {
    /// Row identifier (shared counter).
    pub id: MonetizationId,

    /// The creator this row belongs to.
    pub user_id: UserId,

    /// Lifetime earnings in cents.
    pub total_earnings: i64,

    /// Earnings this month in cents.
    pub monthly_earnings: i64,

    /// Earnings this week in cents.
    pub weekly_earnings: i64,

    /// Engagement rate, percent × 100.
    pub engagement_rate: u32,

    /// Enrolled in the creator fund.
    pub creator_fund_enabled: bool,

    /// Accepting virtual gifts.
    pub virtual_gifts_enabled: bool,

    /// Open to brand partnerships.
    pub brand_partnerships_enabled: bool,

    /// Preferred payout channel.
    pub payment_method: Option<String>,

    /// When the row was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Monetization {
    /// Build a fresh row with zeroed earnings.
    #[must_use]
    pub fn from_new(id: MonetizationId, new: NewMonetization) -> Self {
        Self {
            id,
            user_id: new.user_id,
            total_earnings: 0,
            monthly_earnings: 0,
            weekly_earnings: 0,
            engagement_rate: 0,
            creator_fund_enabled: new.creator_fund_enabled,
            virtual_gifts_enabled: new.virtual_gifts_enabled,
            brand_partnerships_enabled: new.brand_partnerships_enabled,
            payment_method: new.payment_method,
            updated_at: Utc::now(),
        }
    }
}

/// A request to pay out earnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    /// Unique identifier (shared counter).
    pub id: WithdrawalId,

    /// The requesting creator.
    pub user_id: UserId,

    /// Payment channel tag (`DANA`, `OVO`, `PayPal`, ...).
    pub method: String,

    /// Destination account number.
    pub account_number: String,

    /// Destination account holder.
    pub account_name: String,

    /// Amount in cents.
    pub amount: i64,

    /// Processing status.
    pub status: WithdrawalStatus,

    /// When the request was made.
    pub created_at: DateTime<Utc>,

    /// When the request left `pending`.
    pub processed_at: Option<DateTime<Utc>>,
}

impl Withdrawal {
    /// Build a fresh, pending withdrawal.
    #[must_use]
    pub fn from_new(id: WithdrawalId, new: NewWithdrawal) -> Self {
        Self {
            id,
            user_id: new.user_id,
            method: new.method,
            account_number: new.account_number,
            account_name: new.account_name,
            amount: new.amount,
            status: WithdrawalStatus::Pending,
            created_at: Utc::now(),
            processed_at: None,
        }
    }

    /// Set the status, stamping `processed_at` for any non-pending status and
    /// clearing it for pending.
    pub fn set_status(&mut self, status: WithdrawalStatus) {
        self.status = status;
        self.processed_at = if status == WithdrawalStatus::Pending {
            None
        } else {
            Some(Utc::now())
        };
    }
}

/// Status of a withdrawal.
///
/// `Pending` moves to `Completed` or `Failed`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalStatus {
    /// Waiting to be processed.
    Pending,

    /// Paid out.
    Completed,

    /// Rejected or errored.
    Failed,
}

impl WithdrawalStatus {
    /// The lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Whether no further transition is allowed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Whether `self → next` is a valid transition.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Completed | Self::Failed | Self::Pending)
        )
    }
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> Withdrawal {
        Withdrawal::from_new(
            WithdrawalId::new(12),
            NewWithdrawal {
                user_id: UserId::new(1),
                method: "DANA".into(),
                account_number: "08123456789".into(),
                account_name: "Pro Dancer".into(),
                amount: 50_000,
            },
        )
    }

    #[test]
    fn new_withdrawal_is_pending() {
        let withdrawal = pending();
        assert_eq!(withdrawal.status, WithdrawalStatus::Pending);
        assert!(withdrawal.processed_at.is_none());
    }

    #[test]
    fn leaving_pending_stamps_processed_at() {
        let mut withdrawal = pending();
        withdrawal.set_status(WithdrawalStatus::Completed);
        assert_eq!(withdrawal.status, WithdrawalStatus::Completed);
        assert!(withdrawal.processed_at.is_some());

        withdrawal.set_status(WithdrawalStatus::Pending);
        assert!(withdrawal.processed_at.is_none());
    }

    #[test]
    fn terminal_statuses() {
        assert!(!WithdrawalStatus::Pending.is_terminal());
        assert!(WithdrawalStatus::Completed.is_terminal());
        assert!(WithdrawalStatus::Failed.is_terminal());
    }

    #[test]
    fn transitions() {
        use WithdrawalStatus::{Completed, Failed, Pending};

        assert!(Pending.can_transition_to(Completed));
        assert!(Pending.can_transition_to(Failed));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Failed));
        assert!(!Failed.can_transition_to(Completed));
    }

    #[test]
    fn status_wire_format() {
        let json = serde_json::to_string(&WithdrawalStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn status_displays_as_wire_name() {
        for status in [
            WithdrawalStatus::Pending,
            WithdrawalStatus::Completed,
            WithdrawalStatus::Failed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
        assert_eq!(WithdrawalStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn new_monetization_zeroes_earnings() {
        let row = Monetization::from_new(
            MonetizationId::new(20),
            NewMonetization {
                user_id: UserId::new(1),
                creator_fund_enabled: true,
                virtual_gifts_enabled: false,
                brand_partnerships_enabled: false,
                payment_method: Some("PayPal".into()),
            },
        );

        assert_eq!(row.total_earnings, 0);
        assert_eq!(row.monthly_earnings, 0);
        assert_eq!(row.weekly_earnings, 0);
        assert_eq!(row.engagement_rate, 0);
        assert!(row.creator_fund_enabled);
    }
}
