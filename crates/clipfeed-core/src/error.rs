//! Error types for clipfeed request validation.

/// Result type for request validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A request payload does not have the expected shape.
///
/// Raised by the caller's validation step before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is missing or blank.
    #[error("{field} must not be empty")]
    Empty {
        /// The offending field (wire name).
        field: &'static str,
    },

    /// A numeric field must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// The offending field (wire name).
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A field is present but malformed.
    #[error("{field} is invalid: {reason}")]
    Invalid {
        /// The offending field (wire name).
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ValidationError {
    /// The wire name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::NotPositive { field, .. } | Self::Invalid { field, .. } => {
                field
            }
        }
    }
}
