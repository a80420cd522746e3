//! Integration tests for MakeReady.
//!
//! These tests assemble the real router over fresh in-process state and
//! drive it with `tower::ServiceExt::oneshot` - no network, no external
//! services. Identity is supplied per request through the gateway header,
//! exactly as the deployed service receives it.
//!
//! # Test Categories
//!
//! - `access_control` - Anonymous/role gating across the contract
//! - `contact_and_plans` - Public intake and catalog reads
//! - `profiles` - Onboarding, role assignment, introspection
//! - `properties` - Registration and reads
//! - `service_requests` - The workflow core end to end

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use makeready_core::Principal;
use makeready_server::auth::PRINCIPAL_HEADER;
use makeready_server::config::ServerConfig;
use makeready_server::routes;
use makeready_server::state::AppState;

/// A test instance of the assembled application.
pub struct TestApp {
    app: Router,
}

impl TestApp {
    /// Build an app with no bootstrap admins.
    #[must_use]
    pub fn new() -> Self {
        Self::with_admins(&[])
    }

    /// Build an app with the given principals seeded as admins.
    #[must_use]
    pub fn with_admins(admins: &[&str]) -> Self {
        let config = ServerConfig {
            bootstrap_admins: admins.iter().copied().map(Principal::from).collect(),
            ..ServerConfig::default()
        };
        Self {
            app: routes::app(AppState::new(config)),
        }
    }

    /// Issue a request and return `(status, parsed body)`.
    ///
    /// `caller` becomes the gateway identity header; `None` is anonymous.
    /// Empty response bodies parse as `Value::Null`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the response body is not
    /// JSON (health excepted - see [`TestApp::get_text`]).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        caller: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = caller {
            builder = builder.header(PRINCIPAL_HEADER, token);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };

        (status, value)
    }

    /// Issue a GET and return the raw text body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body is not UTF-8.
    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");

        (
            status,
            String::from_utf8(bytes.to_vec()).expect("body is not UTF-8"),
        )
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
