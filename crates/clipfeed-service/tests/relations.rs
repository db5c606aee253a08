//! Follow and like integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::{json, Value};

// ============================================================================
// Follows
// ============================================================================

#[tokio::test]
async fn follow_then_unfollow_restores_counters() {
    let harness = TestHarness::new();
    let a = harness.create_user("alice").await;
    let b = harness.create_user("bob").await;

    let response = harness
        .server
        .post("/api/follows")
        .json(&json!({ "followerId": a["id"], "followingId": b["id"] }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = harness
        .server
        .get(&format!("/api/follows/{}/{}", a["id"], b["id"]))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["isFollowing"], true);

    assert_eq!(harness.get_user(&a["id"]).await["following"], 1);
    assert_eq!(harness.get_user(&b["id"]).await["followers"], 1);

    let response = harness
        .server
        .delete(&format!("/api/follows/{}/{}", a["id"], b["id"]))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let response = harness
        .server
        .get(&format!("/api/follows/{}/{}", a["id"], b["id"]))
        .await;
    let body: Value = response.json();
    assert_eq!(body["isFollowing"], false);

    assert_eq!(harness.get_user(&a["id"]).await["following"], 0);
    assert_eq!(harness.get_user(&b["id"]).await["followers"], 0);
}

#[tokio::test]
async fn follow_is_directional() {
    let harness = TestHarness::new();
    let a = harness.create_user("alice").await;
    let b = harness.create_user("bob").await;

    harness
        .server
        .post("/api/follows")
        .json(&json!({ "followerId": a["id"], "followingId": b["id"] }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = harness
        .server
        .get(&format!("/api/follows/{}/{}", b["id"], a["id"]))
        .await;
    let body: Value = response.json();
    assert_eq!(body["isFollowing"], false);
}

#[tokio::test]
async fn repeated_follow_counts_once() {
    let harness = TestHarness::new();
    let a = harness.create_user("alice").await;
    let b = harness.create_user("bob").await;

    for _ in 0..2 {
        harness
            .server
            .post("/api/follows")
            .json(&json!({ "followerId": a["id"], "followingId": b["id"] }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(harness.get_user(&b["id"]).await["followers"], 1);
}

#[tokio::test]
async fn unfollow_without_follow_is_noop() {
    let harness = TestHarness::new();
    let a = harness.create_user("alice").await;
    let b = harness.create_user("bob").await;

    let response = harness
        .server
        .delete(&format!("/api/follows/{}/{}", a["id"], b["id"]))
        .await;

    response.assert_status_ok();
    assert_eq!(harness.get_user(&a["id"]).await["following"], 0);
    assert_eq!(harness.get_user(&b["id"]).await["followers"], 0);
}

#[tokio::test]
async fn follow_with_bad_body_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/follows")
        .json(&json!({ "followerId": "one" }))
        .await;

    response.assert_status_bad_request();
}

// ============================================================================
// Likes
// ============================================================================

#[tokio::test]
async fn like_then_unlike_restores_counter() {
    let harness = TestHarness::new();
    let user = harness.create_user("alice").await;
    let video = harness.create_video(&user["id"], true).await;

    let response = harness
        .server
        .post("/api/likes")
        .json(&json!({ "userId": user["id"], "videoId": video["id"] }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = harness
        .server
        .get(&format!("/api/likes/{}/{}", user["id"], video["id"]))
        .await;
    let body: Value = response.json();
    assert_eq!(body["isLiked"], true);
    assert_eq!(harness.get_video(&video["id"]).await["likes"], 1);

    harness
        .server
        .delete(&format!("/api/likes/{}/{}", user["id"], video["id"]))
        .await
        .assert_status_ok();

    let response = harness
        .server
        .get(&format!("/api/likes/{}/{}", user["id"], video["id"]))
        .await;
    let body: Value = response.json();
    assert_eq!(body["isLiked"], false);
    assert_eq!(harness.get_video(&video["id"]).await["likes"], 0);
}

#[tokio::test]
async fn unlike_without_like_never_goes_negative() {
    let harness = TestHarness::new();
    let user = harness.create_user("alice").await;
    let video = harness.create_video(&user["id"], true).await;

    harness
        .server
        .delete(&format!("/api/likes/{}/{}", user["id"], video["id"]))
        .await
        .assert_status_ok();

    assert_eq!(harness.get_video(&video["id"]).await["likes"], 0);
}

#[tokio::test]
async fn like_path_with_bad_id_fails() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/likes/1/video").await;

    response.assert_status_bad_request();
}
