//! Request models for creating and patching entities.
//!
//! Each model lists exactly the fields a caller may supply; anything else in
//! the payload is dropped during deserialization. Server-owned fields (ids,
//! counters, timestamps, withdrawal status) are never accepted here.
//!
//! Validation is the caller's job: run [`Validate::validate`] before handing a
//! model to the store. The store trusts its inputs.

use serde::Deserialize;

use crate::error::{Result, ValidationError};
use crate::{CommentId, MusicId, UserId, VideoId};

/// Shape checks for a request model.
pub trait Validate {
    /// Check the payload.
    ///
    /// # Errors
    ///
    /// Returns the first field that does not have the expected shape.
    fn validate(&self) -> Result<()>;
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

fn require_if_present(field: &'static str, value: Option<&str>) -> Result<()> {
    value.map_or(Ok(()), |v| require(field, v))
}

fn require_email(field: &'static str, value: &str) -> Result<()> {
    require(field, value)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::Invalid {
            field,
            reason: "expected an address of the form name@domain".into(),
        }),
    }
}

fn require_positive(field: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(ValidationError::Invalid {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

const fn default_true() -> bool {
    true
}

// ============================================================================
// Users
// ============================================================================

/// Fields accepted when registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// External identity reference.
    pub uid: String,
    /// Handle.
    pub username: String,
    /// Display name.
    pub display_name: String,
    /// Contact email.
    pub email: String,
    /// Avatar URL.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Profile text.
    #[serde(default)]
    pub bio: Option<String>,
}

impl Validate for NewUser {
    fn validate(&self) -> Result<()> {
        require("uid", &self.uid)?;
        require("username", &self.username)?;
        require("displayName", &self.display_name)?;
        require_email("email", &self.email)
    }
}

/// Partial update of a user profile. `None` leaves the field untouched.
///
/// Aggregate counters are not patchable; they belong to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// New handle.
    #[serde(default)]
    pub username: Option<String>,
    /// New display name.
    #[serde(default)]
    pub display_name: Option<String>,
    /// New email.
    #[serde(default)]
    pub email: Option<String>,
    /// New avatar URL.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// New profile text.
    #[serde(default)]
    pub bio: Option<String>,
    /// New verified flag.
    #[serde(default)]
    pub is_verified: Option<bool>,
}

impl UserPatch {
    /// Merge the present fields over `user`, replacing each one whole.
    pub fn apply_to(self, user: &mut crate::User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(display_name) = self.display_name {
            user.display_name = display_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(profile_image) = self.profile_image {
            user.profile_image = Some(profile_image);
        }
        if let Some(bio) = self.bio {
            user.bio = Some(bio);
        }
        if let Some(is_verified) = self.is_verified {
            user.is_verified = is_verified;
        }
    }
}

impl Validate for UserPatch {
    fn validate(&self) -> Result<()> {
        require_if_present("username", self.username.as_deref())?;
        require_if_present("displayName", self.display_name.as_deref())?;
        self.email
            .as_deref()
            .map_or(Ok(()), |email| require_email("email", email))
    }
}

// ============================================================================
// Videos and comments
// ============================================================================

/// Fields accepted when publishing a video.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    /// Owner.
    pub user_id: UserId,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Caption.
    #[serde(default)]
    pub description: Option<String>,
    /// Uploaded media URL.
    pub video_url: String,
    /// Poster frame URL.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Background track.
    #[serde(default)]
    pub music_id: Option<MusicId>,
    /// Feed visibility (default: public).
    #[serde(default = "default_true")]
    pub is_public: bool,
}

impl Validate for NewVideo {
    fn validate(&self) -> Result<()> {
        require("videoUrl", &self.video_url)
    }
}

/// Fields accepted when commenting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    /// The commented video.
    pub video_id: VideoId,
    /// Author.
    pub user_id: UserId,
    /// Comment text.
    pub content: String,
    /// Parent comment for replies.
    #[serde(default)]
    pub parent_id: Option<CommentId>,
}

impl Validate for NewComment {
    fn validate(&self) -> Result<()> {
        require("content", &self.content)
    }
}

// ============================================================================
// Relations
// ============================================================================

/// Fields accepted when following a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFollow {
    /// The user doing the following.
    pub follower_id: UserId,
    /// The user being followed.
    pub following_id: UserId,
}

impl Validate for NewFollow {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Fields accepted when liking a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLike {
    /// The user who likes.
    pub user_id: UserId,
    /// The liked video.
    pub video_id: VideoId,
}

impl Validate for NewLike {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Music
// ============================================================================

/// Fields accepted when adding a track.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMusic {
    /// Track title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Audio file URL.
    pub audio_url: String,
    /// Length in seconds.
    #[serde(default)]
    pub duration: Option<u32>,
}

impl Validate for NewMusic {
    fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("artist", &self.artist)?;
        require("audioUrl", &self.audio_url)?;
        if let Some(duration) = self.duration {
            require_positive("duration", i64::from(duration))?;
        }
        Ok(())
    }
}

// ============================================================================
// Monetization
// ============================================================================

/// Fields accepted when enabling monetization for a creator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMonetization {
    /// The creator.
    pub user_id: UserId,
    /// Creator fund enrollment.
    #[serde(default)]
    pub creator_fund_enabled: bool,
    /// Virtual gifts.
    #[serde(default)]
    pub virtual_gifts_enabled: bool,
    /// Brand partnerships.
    #[serde(default)]
    pub brand_partnerships_enabled: bool,
    /// Preferred payout channel.
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl Validate for NewMonetization {
    fn validate(&self) -> Result<()> {
        require_if_present("paymentMethod", self.payment_method.as_deref())
    }
}

/// Partial update of a monetization row. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetizationPatch {
    /// Lifetime earnings in cents.
    #[serde(default)]
    pub total_earnings: Option<i64>,
    /// Monthly earnings in cents.
    #[serde(default)]
    pub monthly_earnings: Option<i64>,
    /// Weekly earnings in cents.
    #[serde(default)]
    pub weekly_earnings: Option<i64>,
    /// Engagement rate, percent × 100.
    #[serde(default)]
    pub engagement_rate: Option<u32>,
    /// Creator fund enrollment.
    #[serde(default)]
    pub creator_fund_enabled: Option<bool>,
    /// Virtual gifts.
    #[serde(default)]
    pub virtual_gifts_enabled: Option<bool>,
    /// Brand partnerships.
    #[serde(default)]
    pub brand_partnerships_enabled: Option<bool>,
    /// Preferred payout channel.
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl MonetizationPatch {
    /// Merge the present fields over `row`. Does not touch `updated_at`.
    pub fn apply_to(self, row: &mut crate::Monetization) {
        if let Some(v) = self.total_earnings {
            row.total_earnings = v;
        }
        if let Some(v) = self.monthly_earnings {
            row.monthly_earnings = v;
        }
        if let Some(v) = self.weekly_earnings {
            row.weekly_earnings = v;
        }
        if let Some(v) = self.engagement_rate {
            row.engagement_rate = v;
        }
        if let Some(v) = self.creator_fund_enabled {
            row.creator_fund_enabled = v;
        }
        if let Some(v) = self.virtual_gifts_enabled {
            row.virtual_gifts_enabled = v;
        }
        if let Some(v) = self.brand_partnerships_enabled {
            row.brand_partnerships_enabled = v;
        }
        if let Some(v) = self.payment_method {
            row.payment_method = Some(v);
        }
    }
}

impl Validate for MonetizationPatch {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("totalEarnings", self.total_earnings),
            ("monthlyEarnings", self.monthly_earnings),
            ("weeklyEarnings", self.weekly_earnings),
        ] {
            if let Some(value) = value {
                require_non_negative(field, value)?;
            }
        }
        require_if_present("paymentMethod", self.payment_method.as_deref())
    }
}

// ============================================================================
// Withdrawals
// ============================================================================

/// Fields accepted when requesting a payout. Status is always server-owned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWithdrawal {
    /// The requesting creator.
    pub user_id: UserId,
    /// Payment channel tag.
    pub method: String,
    /// Destination account number.
    pub account_number: String,
    /// Destination account holder.
    pub account_name: String,
    /// Amount in cents.
    pub amount: i64,
}

impl Validate for NewWithdrawal {
    fn validate(&self) -> Result<()> {
        require("method", &self.method)?;
        require("accountNumber", &self.account_number)?;
        require("accountName", &self.account_name)?;
        require_positive("amount", self.amount)
    }
}
