//! Profile and role route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use makeready_core::{Principal, Role};

use crate::auth::CallerIdentity;
use crate::error::AppError;
use crate::models::UserProfile;
use crate::services::ProfileService;
use crate::state::AppState;

/// Profile save payload.
///
/// The role field is part of the wire contract; it never grants privilege
/// (see [`ProfileService::save_own_profile`]).
#[derive(Debug, Deserialize)]
pub struct SaveProfileForm {
    pub name: String,
    pub role: String,
}

/// Response carrying the caller's role.
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: Role,
}

/// Response for the admin check.
#[derive(Debug, Serialize)]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

/// Get the caller's own profile.
///
/// GET /api/me/profile
///
/// Returns `null` until a profile is saved; never fails.
#[instrument(skip(state))]
pub async fn own_profile(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> Json<Option<UserProfile>> {
    Json(ProfileService::new(&state).get_own_profile(&caller))
}

/// Save the caller's own profile.
///
/// PUT /api/me/profile
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn save_own_profile(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(form): Json<SaveProfileForm>,
) -> Result<Json<UserProfile>, AppError> {
    let role: Role = form.role.parse().map_err(AppError::InvalidInput)?;

    let profile = ProfileService::new(&state).save_own_profile(&caller, &form.name, role)?;
    Ok(Json(profile))
}

/// Get the caller's effective role.
///
/// GET /api/me/role
///
/// `guest` until a profile exists; never fails.
#[instrument(skip(state))]
pub async fn own_role(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> Json<RoleResponse> {
    Json(RoleResponse {
        role: ProfileService::new(&state).get_own_role(&caller),
    })
}

/// Whether the caller holds the admin role.
///
/// GET /api/me/is-admin
#[instrument(skip(state))]
pub async fn is_admin(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> Json<IsAdminResponse> {
    Json(IsAdminResponse {
        is_admin: ProfileService::new(&state).is_admin(&caller),
    })
}

/// Get a principal's profile (self or admin).
///
/// GET /api/users/{principal}/profile
#[instrument(skip(state))]
pub async fn user_profile(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(principal): Path<Principal>,
) -> Result<Json<Option<UserProfile>>, AppError> {
    let profile = ProfileService::new(&state).get_user_profile(&caller, &principal)?;
    Ok(Json(profile))
}

/// Role assignment payload.
#[derive(Debug, Deserialize)]
pub struct AssignRoleForm {
    pub role: String,
}

/// Assign a role to a principal (admin-only).
///
/// PUT /api/users/{principal}/role
#[instrument(skip(state, form))]
pub async fn assign_role(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(principal): Path<Principal>,
    Json(form): Json<AssignRoleForm>,
) -> Result<StatusCode, AppError> {
    let role: Role = form.role.parse().map_err(AppError::InvalidInput)?;

    ProfileService::new(&state).assign_role(&caller, &principal, role)?;
    Ok(StatusCode::NO_CONTENT)
}
