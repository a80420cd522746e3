//! Contact intake route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use makeready_core::ContactFormId;

use crate::auth::CallerIdentity;
use crate::error::AppError;
use crate::models::ContactForm;
use crate::services::{ContactService, contact::NewSubmission};
use crate::state::AppState;

/// Contact form submission payload.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Response carrying a freshly created id.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: ContactFormId,
}

/// Submit a contact form.
///
/// POST /api/contact
///
/// Open to anonymous callers and never rejects a lead; fields are stored
/// verbatim.
#[instrument(skip(state, form), fields(name = %form.name))]
pub async fn submit(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(form): Json<SubmitForm>,
) -> (StatusCode, Json<CreatedResponse>) {
    let id = ContactService::new(&state).submit(
        &caller,
        NewSubmission {
            name: form.name,
            email: form.email,
            phone: form.phone,
            message: form.message,
        },
    );

    (StatusCode::CREATED, Json(CreatedResponse { id }))
}

/// List all contact form submissions (admin-only).
///
/// GET /api/contact
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> Result<Json<Vec<ContactForm>>, AppError> {
    let forms = ContactService::new(&state).get_all(&caller)?;
    Ok(Json(forms))
}

/// Get one contact form submission (admin-only).
///
/// GET /api/contact/{id}
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<ContactFormId>,
) -> Result<Json<ContactForm>, AppError> {
    let form = ContactService::new(&state).get(&caller, &id)?;
    Ok(Json(form))
}
