//! Background music tracks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::NewMusic;
use crate::MusicId;

/// A track that can be attached to a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Music {
    /// Unique identifier (shared counter).
    pub id: MusicId,

    /// Track title.
    pub title: String,

    /// Performing artist.
    pub artist: String,

    /// Audio file URL.
    pub audio_url: String,

    /// Length in seconds.
    pub duration: Option<u32>,

    /// When the track was added.
    pub created_at: DateTime<Utc>,
}

impl Music {
    /// Build a fresh track record.
    #[must_use]
    pub fn from_new(id: MusicId, new: NewMusic) -> Self {
        Self {
            id,
            title: new.title,
            artist: new.artist,
            audio_url: new.audio_url,
            duration: new.duration,
            created_at: Utc::now(),
        }
    }
}
