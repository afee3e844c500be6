//! Common test utilities and fixtures for integration tests.
//!
//! Sessions live in memory, so every TestContext starts with an empty store
//! and needs no external services.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use serde_json::Value;

use tense_drill_server::config::Config;
use tense_drill_server::{router, AppState};

/// Test context wrapping an app with its own session store.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with custom configuration.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config);
        let app = router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server on the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Create a session for the sample statement and return its ID.
    pub async fn create_sample_session(&self, server: &TestServer) -> String {
        let response = server
            .post("/api/sessions")
            .json(&fixtures::create_session_request(
                &fixtures::STATEMENT_EN,
                &fixtures::STATEMENT_ES,
                None,
            ))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        body["id"].as_str().unwrap().to_string()
    }
}
