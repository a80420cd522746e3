//! Integration tests for profile onboarding and role assignment.

use axum::http::StatusCode;
use serde_json::{Value, json};

use makeready_integration_tests::TestApp;

#[tokio::test]
async fn test_guest_until_profile_saved() {
    let app = TestApp::new();

    let (status, body) = app.request("GET", "/api/me/profile", Some("agent-b"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (_, body) = app.request("GET", "/api/me/role", Some("agent-b"), None).await;
    assert_eq!(body["role"], "guest");

    let (status, body) = app
        .request(
            "PUT",
            "/api/me/profile",
            Some("agent-b"),
            Some(json!({"name": "Dana Whitfield", "role": "user"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Dana Whitfield");
    assert_eq!(body["role"], "user");

    let (_, body) = app.request("GET", "/api/me/profile", Some("agent-b"), None).await;
    assert_eq!(body["name"], "Dana Whitfield");

    let (_, body) = app.request("GET", "/api/me/role", Some("agent-b"), None).await;
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn test_empty_name_is_invalid_input() {
    let app = TestApp::new();

    let (status, _) = app
        .request(
            "PUT",
            "/api/me/profile",
            Some("agent-b"),
            Some(json!({"name": "   ", "role": "user"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_requested_admin_role_is_not_granted() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            "PUT",
            "/api/me/profile",
            Some("agent-b"),
            Some(json!({"name": "Dana", "role": "admin"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "user");

    let (_, body) = app.request("GET", "/api/me/is-admin", Some("agent-b"), None).await;
    assert_eq!(body["is_admin"], false);
}

#[tokio::test]
async fn test_unknown_role_string_is_invalid_input() {
    let app = TestApp::new();

    let (status, _) = app
        .request(
            "PUT",
            "/api/me/profile",
            Some("agent-b"),
            Some(json!({"name": "Dana", "role": "owner"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bootstrap_admin_is_admin() {
    let app = TestApp::with_admins(&["admin-a"]);

    let (_, body) = app.request("GET", "/api/me/is-admin", Some("admin-a"), None).await;
    assert_eq!(body["is_admin"], true);

    let (_, body) = app.request("GET", "/api/me/role", Some("admin-a"), None).await;
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn test_admin_assigns_and_revokes_role() {
    let app = TestApp::with_admins(&["admin-a"]);

    app.request(
        "PUT",
        "/api/me/profile",
        Some("agent-b"),
        Some(json!({"name": "Dana", "role": "user"})),
    )
    .await;

    let (status, _) = app
        .request(
            "PUT",
            "/api/users/agent-b/role",
            Some("admin-a"),
            Some(json!({"role": "admin"})),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.request("GET", "/api/me/is-admin", Some("agent-b"), None).await;
    assert_eq!(body["is_admin"], true);

    // No self-demotion guard: the promoted admin can demote themselves.
    let (status, _) = app
        .request(
            "PUT",
            "/api/users/agent-b/role",
            Some("agent-b"),
            Some(json!({"role": "user"})),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_role_assignment_requires_admin() {
    let app = TestApp::with_admins(&["admin-a"]);

    app.request(
        "PUT",
        "/api/me/profile",
        Some("agent-b"),
        Some(json!({"name": "Dana", "role": "user"})),
    )
    .await;

    let (status, _) = app
        .request(
            "PUT",
            "/api/users/agent-b/role",
            Some("agent-b"),
            Some(json!({"role": "admin"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_role_assignment_to_missing_profile_is_not_found() {
    let app = TestApp::with_admins(&["admin-a"]);

    let (status, _) = app
        .request(
            "PUT",
            "/api/users/nobody/role",
            Some("admin-a"),
            Some(json!({"role": "admin"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_profile_readable_by_self_and_admin_only() {
    let app = TestApp::with_admins(&["admin-a"]);

    app.request(
        "PUT",
        "/api/me/profile",
        Some("agent-b"),
        Some(json!({"name": "Dana", "role": "user"})),
    )
    .await;

    let (status, body) = app
        .request("GET", "/api/users/agent-b/profile", Some("agent-b"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Dana");

    let (status, _) = app
        .request("GET", "/api/users/agent-b/profile", Some("admin-a"), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request("GET", "/api/users/agent-b/profile", Some("agent-c"), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_anonymous_introspection_never_fails() {
    let app = TestApp::new();

    let (status, body) = app.request("GET", "/api/me/profile", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = app.request("GET", "/api/me/role", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "guest");

    let (status, body) = app.request("GET", "/api/me/is-admin", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_admin"], false);
}

#[tokio::test]
async fn test_resave_updates_name_and_keeps_assigned_role() {
    let app = TestApp::with_admins(&["admin-a"]);

    app.request(
        "PUT",
        "/api/me/profile",
        Some("agent-b"),
        Some(json!({"name": "Dana", "role": "user"})),
    )
    .await;
    app.request(
        "PUT",
        "/api/users/agent-b/role",
        Some("admin-a"),
        Some(json!({"role": "admin"})),
    )
    .await;

    let (_, body) = app
        .request(
            "PUT",
            "/api/me/profile",
            Some("agent-b"),
            Some(json!({"name": "Dana Whitfield", "role": "user"})),
        )
        .await;
    assert_eq!(body["name"], "Dana Whitfield");
    assert_eq!(body["role"], "admin");
}
