//! User profile types.
//!
//! Identity (`uid`) and avatar storage live with external providers; the
//! platform only keeps the opaque references they hand back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::NewUser;
use crate::UserId;

/// A user profile.
///
/// `followers`, `following` and `total_likes` are cached aggregates kept in
/// sync by the store on every relation write. They are never recomputed on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (shared counter).
    pub id: UserId,

    /// External identity reference.
    pub uid: String,

    /// Handle shown as `@username`.
    pub username: String,

    /// Display name.
    pub display_name: String,

    /// Contact email.
    pub email: String,

    /// Avatar URL.
    pub profile_image: Option<String>,

    /// Free-form profile text.
    pub bio: Option<String>,

    /// Number of users following this user.
    pub followers: u64,

    /// Number of users this user follows.
    pub following: u64,

    /// Likes received across all videos.
    pub total_likes: u64,

    /// Verified badge.
    pub is_verified: bool,

    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh user record with zeroed aggregates.
    #[must_use]
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            uid: new.uid,
            username: new.username,
            display_name: new.display_name,
            email: new.email,
            profile_image: new.profile_image,
            bio: new.bio,
            followers: 0,
            following: 0,
            total_likes: 0,
            is_verified: false,
            created_at: Utc::now(),
        }
    }
}
