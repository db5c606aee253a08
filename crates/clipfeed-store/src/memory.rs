//! In-memory storage implementation.
//!
//! This module provides the `MemoryStore` implementation of the `Store` trait.
//! Every collection lives in one [`Tables`] value behind a single `RwLock`, so
//! a relation write and the counter bumps it causes happen under one write
//! guard and are atomic with respect to concurrent callers.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use clipfeed_core::{
    Comment, CommentId, Follow, FollowId, FollowKey, Like, LikeId, LikeKey, Monetization,
    MonetizationId, MonetizationPatch, Music, MusicId, NewComment, NewFollow, NewLike,
    NewMonetization, NewMusic, NewUser, NewVideo, NewWithdrawal, User, UserId, UserPatch, Video,
    VideoId, VideoStat, Withdrawal, WithdrawalId, WithdrawalStatus,
};

use crate::error::{Result, StoreError};
use crate::Store;

/// Every collection plus the shared id counter.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    last_id: u64,
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) videos: BTreeMap<VideoId, Video>,
    pub(crate) comments: BTreeMap<CommentId, Comment>,
    pub(crate) follows: HashMap<FollowKey, Follow>,
    pub(crate) likes: HashMap<LikeKey, Like>,
    pub(crate) music: BTreeMap<MusicId, Music>,
    pub(crate) monetization: BTreeMap<UserId, Monetization>,
    pub(crate) withdrawals: BTreeMap<WithdrawalId, Withdrawal>,
}

impl Tables {
    /// Draw the next value from the shared counter. The first id is 1.
    pub(crate) fn allocate<I: From<u64>>(&mut self) -> I {
        self.last_id += 1;
        I::from(self.last_id)
    }

    /// +1 on one video counter. Returns the new value, or `None` if the video
    /// is missing.
    fn increment_video_stat(&mut self, id: VideoId, stat: VideoStat) -> Option<u64> {
        let video = self.videos.get_mut(&id)?;
        let counter = video.stat_mut(stat);
        *counter = counter.saturating_add(1);
        Some(video.stat(stat))
    }

    fn insert_user(&mut self, new: NewUser) -> User {
        let user = User::from_new(self.allocate(), new);
        self.users.insert(user.id, user.clone());
        user
    }

    fn patch_user(&mut self, id: UserId, patch: UserPatch) -> Result<User> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("user", id))?;

        patch.apply_to(user);
        Ok(user.clone())
    }

    /// Describe the first identity field already held by a user other than
    /// `claimant`. Checked in order uid, username, email; emails compare
    /// case-insensitively.
    fn identity_clash(
        &self,
        claimant: Option<UserId>,
        uid: Option<&str>,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Option<String> {
        let others = || {
            self.users
                .values()
                .filter(move |user| Some(user.id) != claimant)
        };

        if let Some(uid) = uid {
            if others().any(|user| user.uid == uid) {
                return Some(format!("uid {uid} already registered"));
            }
        }
        if let Some(username) = username {
            if others().any(|user| user.username == username) {
                return Some(format!("username {username} already taken"));
            }
        }
        if let Some(email) = email {
            if others().any(|user| user.email.eq_ignore_ascii_case(email)) {
                return Some("email already registered".to_string());
            }
        }
        None
    }

    /// Apply `f` to a user's record if it exists.
    fn with_user(&mut self, id: UserId, f: impl FnOnce(&mut User)) {
        if let Some(user) = self.users.get_mut(&id) {
            f(user);
        }
    }
}

/// Sort newest first; equal timestamps fall back to the later-allocated id.
macro_rules! sort_newest_first {
    ($items:expr) => {
        $items.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)))
    };
}

/// Memory-resident storage implementation.
///
/// Construct one per process (or per test) and share it behind an `Arc`.
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Store for MemoryStore {
    // =========================================================================
    // User Operations
    // =========================================================================

    fn create_user(&self, new: NewUser) -> Result<User> {
        let user = self.write()?.insert_user(new);

        tracing::debug!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    fn register_user(&self, new: NewUser) -> Result<User> {
        let mut tables = self.write()?;
        if let Some(reason) = tables.identity_clash(
            None,
            Some(new.uid.as_str()),
            Some(new.username.as_str()),
            Some(new.email.as_str()),
        ) {
            return Err(StoreError::conflict(reason));
        }
        let user = tables.insert_user(new);

        tracing::debug!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    fn get_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    fn get_user_by_uid(&self, uid: &str) -> Result<Option<User>> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|user| user.uid == uid)
            .cloned())
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User> {
        let user = self.write()?.patch_user(id, patch)?;

        tracing::debug!(user_id = %id, "User updated");
        Ok(user)
    }

    fn update_user_profile(&self, id: UserId, patch: UserPatch) -> Result<User> {
        let mut tables = self.write()?;
        if !tables.users.contains_key(&id) {
            return Err(StoreError::not_found("user", id));
        }
        if let Some(reason) = tables.identity_clash(
            Some(id),
            None,
            patch.username.as_deref(),
            patch.email.as_deref(),
        ) {
            return Err(StoreError::conflict(reason));
        }
        let user = tables.patch_user(id, patch)?;

        tracing::debug!(user_id = %id, "User profile updated");
        Ok(user)
    }

    fn get_all_users(&self) -> Result<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    // =========================================================================
    // Video Operations
    // =========================================================================

    fn create_video(&self, new: NewVideo) -> Result<Video> {
        let mut tables = self.write()?;
        let video = Video::from_new(tables.allocate(), new);
        tables.videos.insert(video.id, video.clone());

        tracing::debug!(video_id = %video.id, user_id = %video.user_id, "Video created");
        Ok(video)
    }

    fn get_video(&self, id: VideoId) -> Result<Option<Video>> {
        Ok(self.read()?.videos.get(&id).cloned())
    }

    fn get_videos_by_user(&self, user_id: UserId) -> Result<Vec<Video>> {
        Ok(self
            .read()?
            .videos
            .values()
            .filter(|video| video.user_id == user_id)
            .cloned()
            .collect())
    }

    fn get_feed_videos(&self, _user_id: Option<UserId>, limit: usize) -> Result<Vec<Video>> {
        let mut feed: Vec<Video> = self
            .read()?
            .videos
            .values()
            .filter(|video| video.is_public)
            .cloned()
            .collect();

        sort_newest_first!(feed);
        feed.truncate(limit);
        Ok(feed)
    }

    fn update_video_stats(&self, id: VideoId, stat: VideoStat) -> Result<()> {
        let mut tables = self.write()?;
        if let Some(value) = tables.increment_video_stat(id, stat) {
            tracing::debug!(video_id = %id, ?stat, value, "Video stat incremented");
        }
        Ok(())
    }

    // =========================================================================
    // Comment Operations
    // =========================================================================

    fn create_comment(&self, new: NewComment) -> Result<Comment> {
        let mut tables = self.write()?;
        let comment = Comment::from_new(tables.allocate(), new);
        tables.comments.insert(comment.id, comment.clone());
        let comments = tables.increment_video_stat(comment.video_id, VideoStat::Comments);

        tracing::debug!(
            comment_id = %comment.id,
            video_id = %comment.video_id,
            ?comments,
            "Comment created"
        );
        Ok(comment)
    }

    fn get_comments_by_video(&self, video_id: VideoId) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .read()?
            .comments
            .values()
            .filter(|comment| comment.video_id == video_id)
            .cloned()
            .collect();

        sort_newest_first!(comments);
        Ok(comments)
    }

    // =========================================================================
    // Follow Operations
    // =========================================================================

    fn is_following(&self, follower_id: UserId, following_id: UserId) -> Result<bool> {
        let key = FollowKey::new(follower_id, following_id);
        Ok(self.read()?.follows.contains_key(&key))
    }

    fn create_follow(&self, new: NewFollow) -> Result<Follow> {
        let key = FollowKey::new(new.follower_id, new.following_id);
        let mut tables = self.write()?;

        if let Some(existing) = tables.follows.get(&key) {
            return Ok(existing.clone());
        }

        let follow = Follow {
            id: tables.allocate::<FollowId>(),
            follower_id: new.follower_id,
            following_id: new.following_id,
            created_at: Utc::now(),
        };
        tables.follows.insert(follow.key(), follow.clone());

        tables.with_user(new.follower_id, |user| {
            user.following = user.following.saturating_add(1);
        });
        tables.with_user(new.following_id, |user| {
            user.followers = user.followers.saturating_add(1);
        });

        tracing::debug!(
            follower_id = %new.follower_id,
            following_id = %new.following_id,
            "Follow created"
        );
        Ok(follow)
    }

    fn delete_follow(&self, follower_id: UserId, following_id: UserId) -> Result<bool> {
        let key = FollowKey::new(follower_id, following_id);
        let mut tables = self.write()?;

        if tables.follows.remove(&key).is_none() {
            return Ok(false);
        }

        tables.with_user(follower_id, |user| {
            user.following = user.following.saturating_sub(1);
        });
        tables.with_user(following_id, |user| {
            user.followers = user.followers.saturating_sub(1);
        });

        tracing::debug!(%follower_id, %following_id, "Follow deleted");
        Ok(true)
    }

    // =========================================================================
    // Like Operations
    // =========================================================================

    fn is_liked(&self, user_id: UserId, video_id: VideoId) -> Result<bool> {
        let key = LikeKey::new(user_id, video_id);
        Ok(self.read()?.likes.contains_key(&key))
    }

    fn create_like(&self, new: NewLike) -> Result<Like> {
        let key = LikeKey::new(new.user_id, new.video_id);
        let mut tables = self.write()?;

        if let Some(existing) = tables.likes.get(&key) {
            return Ok(existing.clone());
        }

        let like = Like {
            id: tables.allocate::<LikeId>(),
            user_id: new.user_id,
            video_id: new.video_id,
            created_at: Utc::now(),
        };
        tables.likes.insert(like.key(), like.clone());
        tables.increment_video_stat(new.video_id, VideoStat::Likes);

        tracing::debug!(user_id = %new.user_id, video_id = %new.video_id, "Like created");
        Ok(like)
    }

    fn delete_like(&self, user_id: UserId, video_id: VideoId) -> Result<bool> {
        let key = LikeKey::new(user_id, video_id);
        let mut tables = self.write()?;

        if tables.likes.remove(&key).is_none() {
            return Ok(false);
        }

        if let Some(video) = tables.videos.get_mut(&video_id) {
            video.likes = video.likes.saturating_sub(1);
        }

        tracing::debug!(%user_id, %video_id, "Like deleted");
        Ok(true)
    }

    // =========================================================================
    // Music Operations
    // =========================================================================

    fn get_music(&self, id: MusicId) -> Result<Option<Music>> {
        Ok(self.read()?.music.get(&id).cloned())
    }

    fn get_all_music(&self) -> Result<Vec<Music>> {
        Ok(self.read()?.music.values().cloned().collect())
    }

    fn create_music(&self, new: NewMusic) -> Result<Music> {
        let mut tables = self.write()?;
        let music = Music::from_new(tables.allocate(), new);
        tables.music.insert(music.id, music.clone());

        tracing::debug!(music_id = %music.id, "Music created");
        Ok(music)
    }

    // =========================================================================
    // Monetization Operations
    // =========================================================================

    fn get_monetization(&self, user_id: UserId) -> Result<Option<Monetization>> {
        Ok(self.read()?.monetization.get(&user_id).cloned())
    }

    fn create_monetization(&self, new: NewMonetization) -> Result<Monetization> {
        let mut tables = self.write()?;
        let row = Monetization::from_new(tables.allocate::<MonetizationId>(), new);
        let replaced = tables.monetization.insert(row.user_id, row.clone()).is_some();

        tracing::debug!(user_id = %row.user_id, replaced, "Monetization created");
        Ok(row)
    }

    fn enable_monetization(&self, new: NewMonetization) -> Result<Monetization> {
        let mut tables = self.write()?;
        if tables.monetization.contains_key(&new.user_id) {
            return Err(StoreError::conflict(format!(
                "monetization already enabled for user {}",
                new.user_id
            )));
        }
        let row = Monetization::from_new(tables.allocate::<MonetizationId>(), new);
        tables.monetization.insert(row.user_id, row.clone());

        tracing::debug!(user_id = %row.user_id, "Monetization enabled");
        Ok(row)
    }

    fn update_monetization(
        &self,
        user_id: UserId,
        patch: MonetizationPatch,
    ) -> Result<Monetization> {
        let mut tables = self.write()?;
        let row = tables
            .monetization
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::not_found("monetization", user_id))?;

        patch.apply_to(row);
        row.updated_at = Utc::now();

        tracing::debug!(%user_id, "Monetization updated");
        Ok(row.clone())
    }

    // =========================================================================
    // Withdrawal Operations
    // =========================================================================

    fn get_withdrawals_by_user(&self, user_id: UserId) -> Result<Vec<Withdrawal>> {
        let mut withdrawals: Vec<Withdrawal> = self
            .read()?
            .withdrawals
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();

        sort_newest_first!(withdrawals);
        Ok(withdrawals)
    }

    fn create_withdrawal(&self, new: NewWithdrawal) -> Result<Withdrawal> {
        let mut tables = self.write()?;
        let withdrawal = Withdrawal::from_new(tables.allocate(), new);
        tables.withdrawals.insert(withdrawal.id, withdrawal.clone());

        tracing::debug!(
            withdrawal_id = %withdrawal.id,
            user_id = %withdrawal.user_id,
            amount = withdrawal.amount,
            "Withdrawal created"
        );
        Ok(withdrawal)
    }

    fn update_withdrawal_status(
        &self,
        id: WithdrawalId,
        status: WithdrawalStatus,
    ) -> Result<Withdrawal> {
        let mut tables = self.write()?;
        let withdrawal = tables
            .withdrawals
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("withdrawal", id))?;

        withdrawal.set_status(status);

        tracing::debug!(withdrawal_id = %id, %status, "Withdrawal status updated");
        Ok(withdrawal.clone())
    }

    fn transition_withdrawal(
        &self,
        id: WithdrawalId,
        next: WithdrawalStatus,
    ) -> Result<Withdrawal> {
        let mut tables = self.write()?;
        let withdrawal = tables
            .withdrawals
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("withdrawal", id))?;

        let current = withdrawal.status;
        if !current.can_transition_to(next) {
            let reason = if current.is_terminal() {
                format!("withdrawal {id} is already {current} and cannot move to {next}")
            } else {
                format!("withdrawal {id} cannot move from {current} to {next}")
            };
            return Err(StoreError::conflict(reason));
        }
        withdrawal.set_status(next);

        tracing::debug!(withdrawal_id = %id, from = %current, to = %next, "Withdrawal transitioned");
        Ok(withdrawal.clone())
    }
}
