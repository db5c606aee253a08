//! Follow and like relations.
//!
//! Both relations are keyed by an ordered pair of foreign ids, so at most one
//! row can exist per pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{FollowId, LikeId, UserId, VideoId};

/// `follower` follows `following`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    /// Row identifier (shared counter).
    pub id: FollowId,

    /// The user doing the following.
    pub follower_id: UserId,

    /// The user being followed.
    pub following_id: UserId,

    /// When the relation was created.
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// The composite key of this relation.
    #[must_use]
    pub const fn key(&self) -> FollowKey {
        FollowKey::new(self.follower_id, self.following_id)
    }
}

/// Composite key of a [`Follow`]: the ordered pair `(follower, following)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FollowKey {
    /// The user doing the following.
    pub follower_id: UserId,
    /// The user being followed.
    pub following_id: UserId,
}

impl FollowKey {
    /// Create a key. Order matters: `(a, b)` and `(b, a)` are distinct.
    #[must_use]
    pub const fn new(follower_id: UserId, following_id: UserId) -> Self {
        Self {
            follower_id,
            following_id,
        }
    }
}

/// `user` liked `video`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    /// Row identifier (shared counter).
    pub id: LikeId,

    /// The user who liked.
    pub user_id: UserId,

    /// The liked video.
    pub video_id: VideoId,

    /// When the like was created.
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// The composite key of this relation.
    #[must_use]
    pub const fn key(&self) -> LikeKey {
        LikeKey::new(self.user_id, self.video_id)
    }
}

/// Composite key of a [`Like`]: the pair `(user, video)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LikeKey {
    /// The user who liked.
    pub user_id: UserId,
    /// The liked video.
    pub video_id: VideoId,
}

impl LikeKey {
    /// Create a key.
    #[must_use]
    pub const fn new(user_id: UserId, video_id: VideoId) -> Self {
        Self { user_id, video_id }
    }
}
