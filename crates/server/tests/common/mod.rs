//! Common test utilities for in-process API testing.
//!
//! The fixture builds the full router around an in-memory pending sync
//! store, so tests need neither a socket nor a database file.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use courrier_core::{
    Config, DrawMode, EngineConfig, MemoryPendingSync, PendingSyncStore, SyncBackend, SyncConfig,
};
use courrier_server::state::AppState;

/// Test fixture wrapping an in-process router.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_history() {
///     let fixture = TestFixture::new();
///     let response = fixture.get("/api/v1/history/TK-2026-0042").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Pending sync store shared with the router
    pub pending_sync: Arc<MemoryPendingSync>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a fixture with the default engine configuration.
    pub fn new() -> Self {
        Self::with_config(TestConfig::default())
    }

    /// Create a fixture with custom engine settings.
    pub fn with_config(test_config: TestConfig) -> Self {
        let config = Config {
            engine: EngineConfig {
                reference_date: test_config.reference_date,
                draw_mode: test_config.draw_mode,
            },
            sync: SyncConfig {
                backend: SyncBackend::Memory,
                ..Default::default()
            },
            ..Default::default()
        };

        let pending_sync = Arc::new(MemoryPendingSync::with_count(test_config.pending));
        let state = Arc::new(AppState::new(
            config,
            Arc::clone(&pending_sync) as Arc<dyn PendingSyncStore>,
        ));

        let router = courrier_server::api::create_router(state);

        Self {
            router,
            pending_sync,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// Configuration for test fixture.
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub reference_date: NaiveDate,
    pub draw_mode: DrawMode,
    /// Initial pending sync count
    pub pending: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            reference_date: NaiveDate::from_ymd_opt(2026, 1, 21).unwrap(),
            draw_mode: DrawMode::Stream,
            pending: 0,
        }
    }
}

impl TestConfig {
    /// Reproduce the historical single-value draw behavior.
    pub fn legacy() -> Self {
        Self {
            draw_mode: DrawMode::Legacy,
            ..Default::default()
        }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
