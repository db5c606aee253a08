//! Common test utilities for clipfeed integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};

use clipfeed_service::{create_router, AppState, ServiceConfig};
use clipfeed_store::MemoryStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
}

impl TestHarness {
    /// Create a new test harness over an empty store.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Create a test harness over the demo catalogue.
    pub fn seeded() -> Self {
        Self::with_store(MemoryStore::with_demo_data().expect("Failed to seed store"))
    }

    fn with_store(store: MemoryStore) -> Self {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            seed_demo_data: false,
            feed_max_limit: 50,
            ..ServiceConfig::default()
        };

        let state = AppState::new(Arc::new(store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server }
    }

    /// Register a user with derived uid and email; returns the response body.
    pub async fn create_user(&self, username: &str) -> Value {
        let response = self
            .server
            .post("/api/users")
            .json(&json!({
                "uid": format!("uid-{username}"),
                "username": username,
                "displayName": username.to_uppercase(),
                "email": format!("{username}@example.com")
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json()
    }

    /// Publish a video for `user_id`; returns the response body.
    pub async fn create_video(&self, user_id: &Value, is_public: bool) -> Value {
        let response = self
            .server
            .post("/api/videos")
            .json(&json!({
                "userId": user_id,
                "title": "clip",
                "videoUrl": "https://cdn.example.com/clip.mp4",
                "isPublic": is_public
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json()
    }

    /// Fetch a user by id.
    pub async fn get_user(&self, id: &Value) -> Value {
        let response = self.server.get(&format!("/api/users/{id}")).await;
        response.assert_status_ok();
        response.json()
    }

    /// Fetch a video by id.
    pub async fn get_video(&self, id: &Value) -> Value {
        let response = self.server.get(&format!("/api/videos/{id}")).await;
        response.assert_status_ok();
        response.json()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
