//! Video and comment types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::{NewComment, NewVideo};
use crate::{CommentId, MusicId, UserId, VideoId};

/// An uploaded video.
///
/// The engagement counters are denormalized: the store bumps them in the same
/// critical section as the like/comment write that caused the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Unique identifier (shared counter).
    pub id: VideoId,

    /// Owner of the video.
    pub user_id: UserId,

    /// Optional title.
    pub title: Option<String>,

    /// Caption, including hashtags.
    pub description: Option<String>,

    /// Location of the uploaded media (opaque, object-store owned).
    pub video_url: String,

    /// Poster frame URL.
    pub thumbnail_url: Option<String>,

    /// Background track, if any.
    pub music_id: Option<MusicId>,

    /// Play count.
    pub views: u64,

    /// Like count.
    pub likes: u64,

    /// Comment count.
    pub comments: u64,

    /// Share count.
    pub shares: u64,

    /// Whether the video shows up in the feed.
    pub is_public: bool,

    /// When the video was created.
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Build a fresh video record with zeroed counters.
    #[must_use]
    pub fn from_new(id: VideoId, new: NewVideo) -> Self {
        Self {
            id,
            user_id: new.user_id,
            title: new.title,
            description: new.description,
            video_url: new.video_url,
            thumbnail_url: new.thumbnail_url,
            music_id: new.music_id,
            views: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            is_public: new.is_public,
            created_at: Utc::now(),
        }
    }

    /// Mutable access to one engagement counter.
    pub fn stat_mut(&mut self, stat: VideoStat) -> &mut u64 {
        match stat {
            VideoStat::Views => &mut self.views,
            VideoStat::Likes => &mut self.likes,
            VideoStat::Comments => &mut self.comments,
            VideoStat::Shares => &mut self.shares,
        }
    }

    /// Read one engagement counter.
    #[must_use]
    pub const fn stat(&self, stat: VideoStat) -> u64 {
        match stat {
            VideoStat::Views => self.views,
            VideoStat::Likes => self.likes,
            VideoStat::Comments => self.comments,
            VideoStat::Shares => self.shares,
        }
    }
}

/// Engagement counters that can be incremented on a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStat {
    /// Plays.
    Views,
    /// Likes.
    Likes,
    /// Comments.
    Comments,
    /// Shares.
    Shares,
}

/// A comment on a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier (shared counter).
    pub id: CommentId,

    /// The commented video.
    pub video_id: VideoId,

    /// The author.
    pub user_id: UserId,

    /// Comment text.
    pub content: String,

    /// Likes on the comment itself.
    pub likes: u64,

    /// Parent comment for threaded replies. Stored, not traversed.
    pub parent_id: Option<CommentId>,

    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a fresh comment record.
    #[must_use]
    pub fn from_new(id: CommentId, new: NewComment) -> Self {
        Self {
            id,
            video_id: new.video_id,
            user_id: new.user_id,
            content: new.content,
            likes: 0,
            parent_id: new.parent_id,
            created_at: Utc::now(),
        }
    }
}
