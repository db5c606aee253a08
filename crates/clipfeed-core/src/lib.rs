//! Core types and utilities for clipfeed.
//!
//! This crate provides the foundational types used throughout the clipfeed platform:
//!
//! - **Identifiers**: `UserId`, `VideoId`, `CommentId`, ... (one shared counter)
//! - **Profiles**: `User`
//! - **Content**: `Video`, `Comment`, `Music`, `VideoStat`
//! - **Relations**: `Follow`, `Like` and their composite keys
//! - **Monetization**: `Monetization`, `Withdrawal`, `WithdrawalStatus`
//! - **Requests**: `NewUser`, `NewVideo`, ... plus the `Validate` trait
//!
//! # Currency Unit
//!
//! Money is stored as `i64` minor units (cents) to avoid floating point
//! precision issues.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod monetization;
pub mod music;
pub mod request;
pub mod social;
pub mod user;
pub mod video;

pub use error::{Result, ValidationError};
pub use ids::{
    CommentId, FollowId, LikeId, MonetizationId, MusicId, UserId, VideoId, WithdrawalId,
};
pub use monetization::{Monetization, Withdrawal, WithdrawalStatus};
pub use music::Music;
pub use request::{
    MonetizationPatch, NewComment, NewFollow, NewLike, NewMonetization, NewMusic, NewUser,
    NewVideo, NewWithdrawal, UserPatch, Validate,
};
pub use social::{Follow, FollowKey, Like, LikeKey};
pub use user::User;
pub use video::{Comment, Video, VideoStat};
