//! Error types for clipfeed storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The record targeted by an update does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record (`user`, `monetization`, `withdrawal`).
        entity: &'static str,
        /// The key that was looked up.
        id: String,
    },

    /// A guarded write was refused because it would break a uniqueness or
    /// state-machine rule.
    #[error("conflict: {reason}")]
    Conflict {
        /// Human-readable description of the clash.
        reason: String,
    },

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }
}
