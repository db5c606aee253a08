//! User profile integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn create_user_success() {
    let harness = TestHarness::new();

    let body = harness.create_user("dancer_pro").await;

    assert_eq!(body["username"], "dancer_pro");
    assert_eq!(body["displayName"], "DANCER_PRO");
    assert_eq!(body["followers"], 0);
    assert_eq!(body["following"], 0);
    assert_eq!(body["totalLikes"], 0);
    assert_eq!(body["isVerified"], false);
    assert!(body["id"].is_u64());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn create_user_ignores_client_counters() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/users")
        .json(&json!({
            "uid": "uid-1",
            "username": "sneaky",
            "displayName": "Sneaky",
            "email": "sneaky@example.com",
            "followers": 1_000_000,
            "isVerified": true
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["followers"], 0);
    assert_eq!(body["isVerified"], false);
}

#[tokio::test]
async fn create_user_missing_field_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/users")
        .json(&json!({ "uid": "uid-1", "username": "nobody" }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn create_user_blank_username_fails_validation() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/users")
        .json(&json!({
            "uid": "uid-1",
            "username": "  ",
            "displayName": "Blank",
            "email": "blank@example.com"
        }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "validation_failed");
    assert_eq!(body["error"]["details"]["field"], "username");
}

#[tokio::test]
async fn create_user_malformed_json_fails() {
    let harness = TestHarness::new();

    let response = harness.server.post("/api/users").text("{not json").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn create_user_duplicate_username_conflicts() {
    let harness = TestHarness::new();
    harness.create_user("dancer_pro").await;

    let response = harness
        .server
        .post("/api/users")
        .json(&json!({
            "uid": "uid-other",
            "username": "dancer_pro",
            "displayName": "Impostor",
            "email": "other@example.com"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_user_duplicate_email_conflicts() {
    let harness = TestHarness::new();
    harness.create_user("dancer_pro").await;

    let response = harness
        .server
        .post("/api/users")
        .json(&json!({
            "uid": "uid-other",
            "username": "someone_else",
            "displayName": "Someone",
            "email": "DANCER_PRO@example.com"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

// ============================================================================
// Lookups
// ============================================================================

#[tokio::test]
async fn get_user_by_id_and_uid() {
    let harness = TestHarness::new();
    let created = harness.create_user("alice").await;

    let by_id = harness.get_user(&created["id"]).await;
    assert_eq!(by_id, created);

    let response = harness.server.get("/api/users/uid/uid-alice").await;
    response.assert_status_ok();
    let by_uid: serde_json::Value = response.json();
    assert_eq!(by_uid["id"], created["id"]);
}

#[tokio::test]
async fn get_missing_user_not_found() {
    let harness = TestHarness::new();

    harness.server.get("/api/users/999").await.assert_status_not_found();
    harness
        .server
        .get("/api/users/uid/ghost")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn get_user_with_non_numeric_id_fails() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/users/abc").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn list_users_in_id_order() {
    let harness = TestHarness::new();
    let a = harness.create_user("alice").await;
    let b = harness.create_user("bob").await;

    let response = harness.server.get("/api/users").await;
    response.assert_status_ok();
    let users: Vec<serde_json::Value> = response.json();
    let ids: Vec<_> = users.iter().map(|u| u["id"].clone()).collect();
    assert_eq!(ids, vec![a["id"].clone(), b["id"].clone()]);
}

#[tokio::test]
async fn username_availability() {
    let harness = TestHarness::new();
    harness.create_user("taken").await;

    let response = harness.server.get("/api/users/username/taken").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["available"], false);
    assert_eq!(body["user"]["username"], "taken");

    let response = harness.server.get("/api/users/username/free").await;
    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["available"], true);
    assert!(body.get("user").is_none());
}

// ============================================================================
// Updates
// ============================================================================

#[tokio::test]
async fn patch_user_merges_fields() {
    let harness = TestHarness::new();
    let created = harness.create_user("alice").await;

    let response = harness
        .server
        .patch(&format!("/api/users/{}", created["id"]))
        .json(&json!({ "bio": "hello", "isVerified": true }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["bio"], "hello");
    assert_eq!(body["isVerified"], true);
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn patch_missing_user_not_found() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .patch("/api/users/404")
        .json(&json!({ "bio": "hello" }))
        .await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn patch_user_bad_email_fails() {
    let harness = TestHarness::new();
    let created = harness.create_user("alice").await;

    let response = harness
        .server
        .patch(&format!("/api/users/{}", created["id"]))
        .json(&json!({ "email": "nope" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn patch_user_taking_another_username_conflicts() {
    let harness = TestHarness::new();
    harness.create_user("alice").await;
    let bob = harness.create_user("bob").await;

    let response = harness
        .server
        .patch(&format!("/api/users/{}", bob["id"]))
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(harness.get_user(&bob["id"]).await["username"], "bob");
}

#[tokio::test]
async fn patch_user_taking_another_email_conflicts() {
    let harness = TestHarness::new();
    harness.create_user("alice").await;
    let bob = harness.create_user("bob").await;

    let response = harness
        .server
        .patch(&format!("/api/users/{}", bob["id"]))
        .json(&json!({ "email": "ALICE@example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(harness.get_user(&bob["id"]).await["email"], "bob@example.com");

    let users: Vec<serde_json::Value> = harness.server.get("/api/users").await.json();
    let usernames: Vec<&str> = users.iter().filter_map(|u| u["username"].as_str()).collect();
    assert_eq!(usernames, ["alice", "bob"]);
}

#[tokio::test]
async fn patch_user_keeping_own_username_succeeds() {
    let harness = TestHarness::new();
    let alice = harness.create_user("alice").await;

    let response = harness
        .server
        .patch(&format!("/api/users/{}", alice["id"]))
        .json(&json!({ "username": "alice", "email": "Alice@example.com" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "Alice@example.com");
}
