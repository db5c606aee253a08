//! Identifier types for clipfeed.
//!
//! Every entity is identified by an integer drawn from one shared counter, so an
//! id value is unique across all entity kinds. Each kind still gets its own
//! newtype so a `VideoId` can never be passed where a `UserId` is expected.
//!
//! # Macro-based ID Types
//!
//! The `int_id_type!` macro reduces boilerplate for the identifier types,
//! ensuring consistent implementation of serialization and display traits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define an integer identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `u64` with implementations for:
/// - `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (as a bare JSON number)
/// - `Display`, `Debug`
/// - `From<u64>`, `Into<u64>`
///
/// # Example
///
/// ```ignore
/// int_id_type!(MyId, "A custom identifier type.");
/// let id = MyId::new(7);
/// assert_eq!(id.to_string(), "7");
/// ```
macro_rules! int_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an identifier from a raw counter value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Return the raw counter value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

int_id_type!(UserId, "A user identifier.");
int_id_type!(VideoId, "A video identifier.");
int_id_type!(CommentId, "A comment identifier.");
int_id_type!(FollowId, "A follow relation identifier.");
int_id_type!(LikeId, "A like relation identifier.");
int_id_type!(MusicId, "A music track identifier.");
int_id_type!(
    MonetizationId,
    "A monetization row identifier.\n\nRows are looked up by their owner's `UserId`; this id only exists to keep the shared counter's global uniqueness."
);
int_id_type!(WithdrawalId, "A withdrawal request identifier.");
