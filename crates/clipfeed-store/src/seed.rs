//! Demo fixture data.
//!
//! Loads a small, fixed catalogue (two tracks, three creators, four videos,
//! four comments and a monetization row per creator) through the regular id
//! counter. Timestamps are back-dated by fixed offsets from load time so the
//! feed and comment orderings are the same on every run.
//!
//! Fixture counters are loaded as-is; they are sample figures, not derived
//! from relation rows.

use chrono::{Duration, Utc};

use clipfeed_core::{
    Comment, Monetization, Music, MusicId, NewComment, NewMonetization, NewMusic, NewUser,
    NewVideo, User, UserId, Video, VideoId,
};

use crate::error::Result;
use crate::memory::{MemoryStore, Tables};

const DEMO_AUDIO_URL: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

struct DemoMusic {
    title: &'static str,
    artist: &'static str,
    duration: u32,
}

const MUSIC: [DemoMusic; 2] = [
    DemoMusic {
        title: "Upbeat Summer",
        artist: "DJ Audio",
        duration: 30,
    },
    DemoMusic {
        title: "Chill Vibes",
        artist: "Lo-Fi Master",
        duration: 45,
    },
];

struct DemoUser {
    username: &'static str,
    display_name: &'static str,
    email: &'static str,
    bio: &'static str,
    followers: u64,
    following: u64,
    total_likes: u64,
    is_verified: bool,
}

const USERS: [DemoUser; 3] = [
    DemoUser {
        username: "dancer_pro",
        display_name: "Pro Dancer",
        email: "dancer@example.com",
        bio: "Professional dancer and choreographer 💃",
        followers: 15_420,
        following: 892,
        total_likes: 234_560,
        is_verified: true,
    },
    DemoUser {
        username: "music_lover",
        display_name: "Music Lover",
        email: "music@example.com",
        bio: "Creating beats and vibes 🎵",
        followers: 8_934,
        following: 1_245,
        total_likes: 89_450,
        is_verified: false,
    },
    DemoUser {
        username: "creative_soul",
        display_name: "Creative Soul",
        email: "creative@example.com",
        bio: "Art meets technology ✨",
        followers: 23_150,
        following: 567,
        total_likes: 156_780,
        is_verified: true,
    },
];

/// `user` and `music` are indexes into [`USERS`] and [`MUSIC`].
struct DemoVideo {
    user: usize,
    music: usize,
    title: &'static str,
    description: &'static str,
    stats: [u64; 4],
    hours_ago: i64,
}

const VIDEOS: [DemoVideo; 4] = [
    DemoVideo {
        user: 0,
        music: 0,
        title: "Amazing Dance Moves",
        description: "Check out these sick dance moves! 🔥 #dance #viral #trending #foryou",
        stats: [125_340, 23_450, 1_234, 567],
        hours_ago: 6 * 24,
    },
    DemoVideo {
        user: 1,
        music: 1,
        title: "Beat Drop Challenge",
        description: "When the beat drops 🎵 Can you handle it? #music #challenge #beatdrop",
        stats: [89_234, 15_678, 892, 234],
        hours_ago: 4 * 24,
    },
    DemoVideo {
        user: 2,
        music: 0,
        title: "Creative Art Process",
        description: "Watch me create magic ✨ Art is life! #art #creative #process #satisfying",
        stats: [67_890, 12_345, 678, 123],
        hours_ago: 2 * 24,
    },
    DemoVideo {
        user: 0,
        music: 1,
        title: "Quick Tutorial",
        description: "Learn this move in 30 seconds! 💪 #tutorial #dance #learn #quick",
        stats: [234_567, 45_678, 2_345, 890],
        hours_ago: 18,
    },
];

/// `video` and `user` are indexes into [`VIDEOS`] and [`USERS`].
struct DemoComment {
    video: usize,
    user: usize,
    content: &'static str,
    likes: u64,
    hours_ago: i64,
}

const COMMENTS: [DemoComment; 4] = [
    DemoComment {
        video: 0,
        user: 1,
        content: "This is incredible! How did you learn to do this?",
        likes: 23,
        hours_ago: 60,
    },
    DemoComment {
        video: 0,
        user: 0,
        content: "Amazing work! 🔥",
        likes: 45,
        hours_ago: 40,
    },
    DemoComment {
        video: 1,
        user: 2,
        content: "I tried this and it worked perfectly! Thanks!",
        likes: 67,
        hours_ago: 20,
    },
    DemoComment {
        video: 2,
        user: 1,
        content: "The creativity is off the charts! 🎨",
        likes: 34,
        hours_ago: 5,
    },
];

/// `(total, monthly, weekly, engagement_rate, virtual_gifts)` per creator.
const EARNINGS: [(i64, i64, i64, u32, bool); 3] = [
    (482_350, 96_420, 23_180, 1_250, true),
    (215_600, 48_900, 11_250, 870, false),
    (350_120, 72_300, 17_640, 1_120, true),
];

impl MemoryStore {
    /// Create a store pre-loaded with the demo catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    pub fn with_demo_data() -> Result<Self> {
        let store = Self::new();
        let mut tables = store.write()?;
        load(&mut tables);
        drop(tables);
        Ok(store)
    }
}

fn load(tables: &mut Tables) {
    let now = Utc::now();

    let music_ids: Vec<MusicId> = MUSIC
        .iter()
        .map(|demo| {
            let music = Music::from_new(
                tables.allocate(),
                NewMusic {
                    title: demo.title.into(),
                    artist: demo.artist.into(),
                    audio_url: DEMO_AUDIO_URL.into(),
                    duration: Some(demo.duration),
                },
            );
            let id = music.id;
            tables.music.insert(id, music);
            id
        })
        .collect();

    let user_ids: Vec<UserId> = USERS
        .iter()
        .enumerate()
        .map(|(n, demo)| {
            let mut user = User::from_new(
                tables.allocate(),
                NewUser {
                    uid: format!("demo-user-{}", n + 1),
                    username: demo.username.into(),
                    display_name: demo.display_name.into(),
                    email: demo.email.into(),
                    profile_image: Some(format!(
                        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
                        demo.username
                    )),
                    bio: Some(demo.bio.into()),
                },
            );
            user.followers = demo.followers;
            user.following = demo.following;
            user.total_likes = demo.total_likes;
            user.is_verified = demo.is_verified;

            let id = user.id;
            tables.users.insert(id, user);
            id
        })
        .collect();

    let video_ids: Vec<VideoId> = VIDEOS
        .iter()
        .map(|demo| {
            let mut video = Video::from_new(
                tables.allocate(),
                NewVideo {
                    user_id: user_ids[demo.user],
                    title: Some(demo.title.into()),
                    description: Some(demo.description.into()),
                    video_url: String::new(),
                    thumbnail_url: None,
                    music_id: Some(music_ids[demo.music]),
                    is_public: true,
                },
            );
            [video.views, video.likes, video.comments, video.shares] = demo.stats;
            video.created_at = now - Duration::hours(demo.hours_ago);

            let id = video.id;
            tables.videos.insert(id, video);
            id
        })
        .collect();

    for demo in &COMMENTS {
        let mut comment = Comment::from_new(
            tables.allocate(),
            NewComment {
                video_id: video_ids[demo.video],
                user_id: user_ids[demo.user],
                content: demo.content.into(),
                parent_id: None,
            },
        );
        comment.likes = demo.likes;
        comment.created_at = now - Duration::hours(demo.hours_ago);
        tables.comments.insert(comment.id, comment);
    }

    for (n, &user_id) in user_ids.iter().enumerate() {
        let (total, monthly, weekly, engagement, gifts) = EARNINGS[n];
        let mut row = Monetization::from_new(
            tables.allocate(),
            NewMonetization {
                user_id,
                creator_fund_enabled: true,
                virtual_gifts_enabled: gifts,
                brand_partnerships_enabled: n < 2,
                payment_method: Some("PayPal".into()),
            },
        );
        row.total_earnings = total;
        row.monthly_earnings = monthly;
        row.weekly_earnings = weekly;
        row.engagement_rate = engagement;
        tables.monetization.insert(user_id, row);
    }

    tracing::info!(
        music = tables.music.len(),
        users = tables.users.len(),
        videos = tables.videos.len(),
        comments = tables.comments.len(),
        "Demo data loaded"
    );
}
