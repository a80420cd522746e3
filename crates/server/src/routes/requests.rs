//! Service request route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use makeready_core::{ContentRef, PropertyId, RequestId, RequestStatus, Urgency};

use crate::auth::CallerIdentity;
use crate::error::AppError;
use crate::models::ServiceRequest;
use crate::services::{RequestService, requests::NewRequest};
use crate::state::AppState;

/// Service request creation payload.
///
/// The boundary speaks display strings ("Medium", "Inspection
/// Showstopper"); unrecognized strings are rejected with `InvalidInput`
/// instead of propagating untyped.
#[derive(Debug, Deserialize)]
pub struct CreateRequestForm {
    pub property_id: PropertyId,
    pub title: String,
    pub description: String,
    pub urgency: String,
}

/// Response carrying a freshly created request id.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: RequestId,
}

/// Status update payload.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusForm {
    pub status: String,
}

/// Photo attachment payload.
#[derive(Debug, Deserialize)]
pub struct UploadPhotoForm {
    pub content_ref: ContentRef,
}

/// File a service request against an existing property.
///
/// POST /api/requests
#[instrument(skip(state, form), fields(property_id = %form.property_id, urgency = %form.urgency))]
pub async fn create(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(form): Json<CreateRequestForm>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let urgency: Urgency = form.urgency.parse().map_err(AppError::InvalidInput)?;

    let id = RequestService::new(&state).create(
        &caller,
        NewRequest {
            property_id: form.property_id,
            title: form.title,
            description: form.description,
            urgency,
        },
    )?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// List all service requests.
///
/// GET /api/requests
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> Result<Json<Vec<ServiceRequest>>, AppError> {
    let listed = RequestService::new(&state).get_all(&caller)?;
    Ok(Json(listed))
}

/// Get one service request.
///
/// GET /api/requests/{id}
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<RequestId>,
) -> Result<Json<ServiceRequest>, AppError> {
    let request = RequestService::new(&state).get(&caller, &id)?;
    Ok(Json(request))
}

/// Set a request's status (admin-only).
///
/// PUT /api/requests/{id}/status
#[instrument(skip(state, form), fields(status = %form.status))]
pub async fn update_status(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<RequestId>,
    Json(form): Json<UpdateStatusForm>,
) -> Result<StatusCode, AppError> {
    let status: RequestStatus = form.status.parse().map_err(AppError::InvalidInput)?;

    RequestService::new(&state).update_status(&caller, &id, status)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Attach a photo content reference to a request.
///
/// POST /api/requests/{id}/photos
#[instrument(skip(state, form))]
pub async fn upload_photo(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<RequestId>,
    Json(form): Json<UploadPhotoForm>,
) -> Result<StatusCode, AppError> {
    RequestService::new(&state).upload_photo(&caller, &id, form.content_ref)?;
    Ok(StatusCode::NO_CONTENT)
}
