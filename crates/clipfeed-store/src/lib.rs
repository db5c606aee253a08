//! Storage layer for clipfeed.
//!
//! This crate owns every entity collection of the platform and keeps the
//! denormalized counters (followers/following, video likes/comments/views)
//! consistent with the relation rows that drive them.
//!
//! # Architecture
//!
//! The store is volatile and memory-resident. It holds:
//!
//! - `users`, `videos`, `comments`, `music`, `withdrawals`: keyed by their own id
//! - `follows`: keyed by the ordered pair `(follower_id, following_id)`
//! - `likes`: keyed by the pair `(user_id, video_id)`
//! - `monetization`: keyed by the owning `user_id` (at most one row per user)
//!
//! All ids come from one shared counter, so an id value is unique across
//! every entity kind.
//!
//! # Error Split
//!
//! Lookups return `Ok(None)` for a missing record. `update_video_stats`,
//! `delete_follow` and `delete_like` are silent no-ops on a missing target,
//! while `update_user`, `update_monetization` and `update_withdrawal_status`
//! fail with [`StoreError::NotFound`]. Callers rely on this split.
//!
//! # Guarded Writes
//!
//! The plain writes (`create_user`, `update_user`, `create_monetization`,
//! `update_withdrawal_status`) enforce no uniqueness or transition rules. Each
//! has a guarded twin (`register_user`, `update_user_profile`,
//! `enable_monetization`, `transition_withdrawal`) that checks and writes
//! under one write guard and fails with [`StoreError::Conflict`] when the rule
//! would be broken. Concurrent guarded writers therefore cannot both pass.
//!
//! # Example
//!
//! ```
//! use clipfeed_core::{NewFollow, NewUser};
//! use clipfeed_store::{MemoryStore, Store};
//!
//! let store = MemoryStore::new();
//! let alice = store.create_user(NewUser {
//!     uid: "uid-alice".into(),
//!     username: "alice".into(),
//!     display_name: "Alice".into(),
//!     email: "alice@example.com".into(),
//!     profile_image: None,
//!     bio: None,
//! }).unwrap();
//! let bob = store.create_user(NewUser {
//!     uid: "uid-bob".into(),
//!     username: "bob".into(),
//!     display_name: "Bob".into(),
//!     email: "bob@example.com".into(),
//!     profile_image: None,
//!     bio: None,
//! }).unwrap();
//!
//! store.create_follow(NewFollow { follower_id: alice.id, following_id: bob.id }).unwrap();
//! assert!(store.is_following(alice.id, bob.id).unwrap());
//! assert_eq!(store.get_user(bob.id).unwrap().unwrap().followers, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;
pub mod seed;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;

use clipfeed_core::{
    Comment, Follow, Like, Monetization, MonetizationPatch, Music, MusicId, NewComment,
    NewFollow, NewLike, NewMonetization, NewMusic, NewUser, NewVideo, NewWithdrawal, User,
    UserId, UserPatch, Video, VideoId, VideoStat, Withdrawal, WithdrawalId, WithdrawalStatus,
};

/// Number of videos returned by the feed when the caller does not ask for a limit.
pub const DEFAULT_FEED_LIMIT: usize = 20;

/// The storage trait defining all repository operations.
///
/// Inputs are trusted: request models must be validated by the caller before
/// they reach the store. Operations with side effects on other aggregates
/// document them; those effects are applied atomically with the primary write.
pub trait Store: Send + Sync {
    // =========================================================================
    // User Operations
    // =========================================================================

    /// Create a user with zeroed aggregates and `is_verified = false`.
    ///
    /// Uniqueness of `uid`, `username` and `email` is not enforced here; use
    /// [`Store::register_user`] for that.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn create_user(&self, new: NewUser) -> Result<User>;

    /// Create a user unless its `uid`, `username` or email (compared
    /// case-insensitively) already belongs to someone.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` naming the first clashing field.
    fn register_user(&self, new: NewUser) -> Result<User>;

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Get a user by external identity reference.
    ///
    /// If several users share the `uid`, the one with the lowest id is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_user_by_uid(&self, uid: &str) -> Result<Option<User>>;

    /// Get a user by handle.
    ///
    /// If several users share the handle, the one with the lowest id is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Merge a patch over an existing user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the user doesn't exist.
    fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User>;

    /// Merge a patch over an existing user unless the new `username` or email
    /// already belongs to another user. Keeping one's own values is allowed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the user doesn't exist, or
    /// `StoreError::Conflict` if the patch takes another user's handle or email.
    fn update_user_profile(&self, id: UserId, patch: UserPatch) -> Result<User>;

    /// List every user, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_all_users(&self) -> Result<Vec<User>>;

    // =========================================================================
    // Video Operations
    // =========================================================================

    /// Create a video with zeroed engagement counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn create_video(&self, new: NewVideo) -> Result<Video>;

    /// Get a video by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_video(&self, id: VideoId) -> Result<Option<Video>>;

    /// List the videos owned by a user, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_videos_by_user(&self, user_id: UserId) -> Result<Vec<Video>>;

    /// Public videos, newest first, at most `limit` of them.
    ///
    /// `user_id` is accepted for API compatibility but does not personalize the
    /// result: every caller sees the same global feed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_feed_videos(&self, user_id: Option<UserId>, limit: usize) -> Result<Vec<Video>>;

    /// Increment exactly one engagement counter by 1.
    ///
    /// A missing video is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn update_video_stats(&self, id: VideoId, stat: VideoStat) -> Result<()>;

    // =========================================================================
    // Comment Operations
    // =========================================================================

    /// Create a comment.
    ///
    /// Side effect: the commented video's `comments` counter goes up by
    /// exactly 1 (if the video exists) under the same lock as the insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn create_comment(&self, new: NewComment) -> Result<Comment>;

    /// Comments on a video, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_comments_by_video(&self, video_id: VideoId) -> Result<Vec<Comment>>;

    // =========================================================================
    // Follow Operations
    // =========================================================================

    /// Whether `follower_id` follows `following_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn is_following(&self, follower_id: UserId, following_id: UserId) -> Result<bool>;

    /// Create the follow relation for the ordered pair.
    ///
    /// Side effects: `following` +1 on the follower and `followers` +1 on the
    /// followee, each only if that user exists. If the pair already exists the
    /// existing row is returned and no counter moves.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn create_follow(&self, new: NewFollow) -> Result<Follow>;

    /// Remove the follow relation for the ordered pair.
    ///
    /// Side effects: `following` -1 on the follower and `followers` -1 on the
    /// followee, clamped at zero. A missing relation is a no-op and moves no
    /// counter. Returns whether a relation was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn delete_follow(&self, follower_id: UserId, following_id: UserId) -> Result<bool>;

    // =========================================================================
    // Like Operations
    // =========================================================================

    /// Whether `user_id` liked `video_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn is_liked(&self, user_id: UserId, video_id: VideoId) -> Result<bool>;

    /// Create the like relation for the pair.
    ///
    /// Side effect: the video's `likes` +1 (if the video exists). If the pair
    /// already exists the existing row is returned and the counter stays put.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn create_like(&self, new: NewLike) -> Result<Like>;

    /// Remove the like relation for the pair.
    ///
    /// Side effect: the video's `likes` -1, clamped at zero. A missing relation
    /// is a no-op. Returns whether a relation was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn delete_like(&self, user_id: UserId, video_id: VideoId) -> Result<bool>;

    // =========================================================================
    // Music Operations
    // =========================================================================

    /// Get a track by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_music(&self, id: MusicId) -> Result<Option<Music>>;

    /// List every track, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_all_music(&self) -> Result<Vec<Music>>;

    /// Add a track.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn create_music(&self, new: NewMusic) -> Result<Music>;

    // =========================================================================
    // Monetization Operations
    // =========================================================================

    /// Get a creator's monetization row.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_monetization(&self, user_id: UserId) -> Result<Option<Monetization>>;

    /// Create a creator's monetization row with zeroed earnings.
    ///
    /// The collection is keyed by `user_id`: creating a second row for the same
    /// user replaces the first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn create_monetization(&self, new: NewMonetization) -> Result<Monetization>;

    /// Create a creator's monetization row only if they have none yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the user already has a row.
    fn enable_monetization(&self, new: NewMonetization) -> Result<Monetization>;

    /// Merge a patch over a creator's row and refresh `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the user has no row.
    fn update_monetization(&self, user_id: UserId, patch: MonetizationPatch)
        -> Result<Monetization>;

    // =========================================================================
    // Withdrawal Operations
    // =========================================================================

    /// A creator's withdrawals, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn get_withdrawals_by_user(&self, user_id: UserId) -> Result<Vec<Withdrawal>>;

    /// Record a withdrawal request as `pending` with no `processed_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    fn create_withdrawal(&self, new: NewWithdrawal) -> Result<Withdrawal>;

    /// Set a withdrawal's status. `processed_at` becomes now for any status
    /// other than `pending`, and is cleared for `pending`.
    ///
    /// The state machine is not policed here; see
    /// [`Store::transition_withdrawal`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the withdrawal doesn't exist.
    fn update_withdrawal_status(
        &self,
        id: WithdrawalId,
        status: WithdrawalStatus,
    ) -> Result<Withdrawal>;

    /// Move a withdrawal to `next` if the state machine allows it, stamping
    /// `processed_at` like [`Store::update_withdrawal_status`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the withdrawal doesn't exist, or
    /// `StoreError::Conflict` if it cannot move from its current status.
    fn transition_withdrawal(
        &self,
        id: WithdrawalId,
        next: WithdrawalStatus,
    ) -> Result<Withdrawal>;
}
