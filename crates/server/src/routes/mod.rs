//! HTTP route handlers for the MakeReady API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//!
//! # Contact intake (submission is public, reads are admin-only)
//! POST /api/contact                     - Submit a contact form
//! GET  /api/contact                     - List all submissions (admin)
//! GET  /api/contact/{id}                - Submission detail (admin)
//!
//! # Plan catalog (public, read-only)
//! GET  /api/plans                       - List all plans
//! GET  /api/plans/{id}                  - Plan detail
//!
//! # Caller profile
//! GET  /api/me/profile                  - Own profile (null until saved)
//! PUT  /api/me/profile                  - Save own profile
//! GET  /api/me/role                     - Own role (guest until onboarded)
//! GET  /api/me/is-admin                 - Admin check
//!
//! # User administration
//! GET  /api/users/{principal}/profile   - Profile lookup (self or admin)
//! PUT  /api/users/{principal}/role      - Assign role (admin)
//!
//! # Properties
//! POST /api/properties                  - Register a property
//! GET  /api/properties                  - List all properties
//! GET  /api/properties/{id}             - Property detail
//!
//! # Service requests
//! POST /api/requests                    - File a service request
//! GET  /api/requests                    - List all requests
//! GET  /api/requests/{id}               - Request detail
//! PUT  /api/requests/{id}/status        - Set status (admin)
//! POST /api/requests/{id}/photos       - Attach a photo reference
//! ```

pub mod contact;
pub mod plans;
pub mod profile;
pub mod properties;
pub mod requests;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the contact intake routes.
fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::submit).get(contact::list))
        .route("/{id}", get(contact::detail))
}

/// Create the plan catalog routes.
fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(plans::list))
        .route("/{id}", get(plans::detail))
}

/// Create the caller-profile routes.
fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::own_profile).put(profile::save_own_profile))
        .route("/role", get(profile::own_role))
        .route("/is-admin", get(profile::is_admin))
}

/// Create the user-administration routes.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/{principal}/profile", get(profile::user_profile))
        .route("/{principal}/role", put(profile::assign_role))
}

/// Create the property routes.
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(properties::create).get(properties::list))
        .route("/{id}", get(properties::detail))
}

/// Create the service request routes.
fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(requests::create).get(requests::list))
        .route("/{id}", get(requests::detail))
        .route("/{id}/status", put(requests::update_status))
        .route("/{id}/photos", post(requests::upload_photo))
}

/// Create all API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contact", contact_routes())
        .nest("/plans", plan_routes())
        .nest("/me", me_routes())
        .nest("/users", user_routes())
        .nest("/properties", property_routes())
        .nest("/requests", request_routes())
}

/// Assemble the application router.
///
/// Telemetry and CORS layers are added by the binary; tests drive this
/// router directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The core has no external
/// dependencies to probe.
async fn health() -> &'static str {
    "ok"
}
