//! Video, feed and comment integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::{json, Value};

// ============================================================================
// Publishing
// ============================================================================

#[tokio::test]
async fn create_video_starts_with_zero_counters() {
    let harness = TestHarness::new();
    let user = harness.create_user("alice").await;

    let video = harness.create_video(&user["id"], true).await;

    assert_eq!(video["userId"], user["id"]);
    assert_eq!(video["views"], 0);
    assert_eq!(video["likes"], 0);
    assert_eq!(video["comments"], 0);
    assert_eq!(video["shares"], 0);
    assert_eq!(video["isPublic"], true);
}

#[tokio::test]
async fn create_video_defaults_to_public() {
    let harness = TestHarness::new();
    let user = harness.create_user("alice").await;

    let response = harness
        .server
        .post("/api/videos")
        .json(&json!({
            "userId": user["id"],
            "videoUrl": "https://cdn.example.com/v.mp4"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["isPublic"], true);
}

#[tokio::test]
async fn create_video_without_url_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/videos")
        .json(&json!({ "userId": 1, "videoUrl": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn get_missing_video_not_found() {
    let harness = TestHarness::new();

    harness.server.get("/api/videos/77").await.assert_status_not_found();
}

#[tokio::test]
async fn videos_by_user() {
    let harness = TestHarness::new();
    let alice = harness.create_user("alice").await;
    let bob = harness.create_user("bob").await;
    harness.create_video(&alice["id"], true).await;
    harness.create_video(&bob["id"], true).await;
    harness.create_video(&alice["id"], false).await;

    let response = harness
        .server
        .get(&format!("/api/videos/user/{}", alice["id"]))
        .await;

    response.assert_status_ok();
    let videos: Vec<Value> = response.json();
    assert_eq!(videos.len(), 2);
    assert!(videos.iter().all(|v| v["userId"] == alice["id"]));
}

// ============================================================================
// Feed
// ============================================================================

#[tokio::test]
async fn feed_shows_public_videos_newest_first() {
    let harness = TestHarness::new();
    let user = harness.create_user("alice").await;
    let first = harness.create_video(&user["id"], true).await;
    let second = harness.create_video(&user["id"], true).await;
    harness.create_video(&user["id"], false).await;

    let response = harness.server.get("/api/videos/feed").await;

    response.assert_status_ok();
    let feed: Vec<Value> = response.json();
    let ids: Vec<_> = feed.iter().map(|v| v["id"].clone()).collect();
    assert_eq!(ids, vec![second["id"].clone(), first["id"].clone()]);
}

#[tokio::test]
async fn feed_respects_limit() {
    let harness = TestHarness::new();
    let user = harness.create_user("alice").await;
    for _ in 0..5 {
        harness.create_video(&user["id"], true).await;
    }

    let response = harness
        .server
        .get("/api/videos/feed")
        .add_query_param("userId", user["id"].as_u64().unwrap())
        .add_query_param("limit", 3)
        .await;

    response.assert_status_ok();
    let feed: Vec<Value> = response.json();
    assert_eq!(feed.len(), 3);
}

#[tokio::test]
async fn feed_rejects_non_numeric_limit() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/videos/feed?limit=lots").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn seeded_feed_is_ordered() {
    let harness = TestHarness::seeded();

    let response = harness.server.get("/api/videos/feed").await;

    response.assert_status_ok();
    let feed: Vec<Value> = response.json();
    let titles: Vec<_> = feed.iter().map(|v| v["title"].clone()).collect();
    assert_eq!(
        titles,
        vec![
            json!("Quick Tutorial"),
            json!("Creative Art Process"),
            json!("Beat Drop Challenge"),
            json!("Amazing Dance Moves"),
        ]
    );
}

// ============================================================================
// Views
// ============================================================================

#[tokio::test]
async fn record_view_increments_views() {
    let harness = TestHarness::new();
    let user = harness.create_user("alice").await;
    let video = harness.create_video(&user["id"], true).await;

    for _ in 0..3 {
        let response = harness
            .server
            .post(&format!("/api/videos/{}/view", video["id"]))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
    }

    let video = harness.get_video(&video["id"]).await;
    assert_eq!(video["views"], 3);
    assert_eq!(video["likes"], 0);
}

#[tokio::test]
async fn record_view_on_missing_video_succeeds() {
    let harness = TestHarness::new();

    let response = harness.server.post("/api/videos/4242/view").await;

    response.assert_status_ok();
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn comment_bumps_counter_and_lists_newest_first() {
    let harness = TestHarness::new();
    let user = harness.create_user("alice").await;
    let video = harness.create_video(&user["id"], true).await;

    for text in ["first", "second"] {
        let response = harness
            .server
            .post("/api/comments")
            .json(&json!({
                "videoId": video["id"],
                "userId": user["id"],
                "content": text
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["likes"], 0);
        assert!(body["parentId"].is_null());
    }

    let video_after = harness.get_video(&video["id"]).await;
    assert_eq!(video_after["comments"], 2);

    let response = harness
        .server
        .get(&format!("/api/videos/{}/comments", video["id"]))
        .await;
    response.assert_status_ok();
    let comments: Vec<Value> = response.json();
    let texts: Vec<_> = comments.iter().map(|c| c["content"].clone()).collect();
    assert_eq!(texts, vec![json!("second"), json!("first")]);
}

#[tokio::test]
async fn blank_comment_fails() {
    let harness = TestHarness::new();
    let user = harness.create_user("alice").await;
    let video = harness.create_video(&user["id"], true).await;

    let response = harness
        .server
        .post("/api/comments")
        .json(&json!({
            "videoId": video["id"],
            "userId": user["id"],
            "content": "   "
        }))
        .await;

    response.assert_status_bad_request();
    let video_after = harness.get_video(&video["id"]).await;
    assert_eq!(video_after["comments"], 0);
}
