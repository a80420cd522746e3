//! Property route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use makeready_core::PropertyId;

use crate::auth::CallerIdentity;
use crate::error::AppError;
use crate::models::Property;
use crate::services::{PropertyService, properties::NewProperty};
use crate::state::AppState;

/// Property registration payload. The id is caller-chosen.
#[derive(Debug, Deserialize)]
pub struct AddPropertyForm {
    pub id: PropertyId,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Register a property; the caller becomes its owner.
///
/// POST /api/properties
#[instrument(skip(state, form), fields(property_id = %form.id))]
pub async fn create(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(form): Json<AddPropertyForm>,
) -> Result<StatusCode, AppError> {
    PropertyService::new(&state).add_property(
        &caller,
        NewProperty {
            id: form.id,
            address: form.address,
            city: form.city,
            state: form.state,
            zip: form.zip,
        },
    )?;
    Ok(StatusCode::CREATED)
}

/// List all properties.
///
/// GET /api/properties
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
) -> Result<Json<Vec<Property>>, AppError> {
    let listed = PropertyService::new(&state).get_all_properties(&caller)?;
    Ok(Json(listed))
}

/// Get one property.
///
/// GET /api/properties/{id}
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(id): Path<PropertyId>,
) -> Result<Json<Property>, AppError> {
    let property = PropertyService::new(&state).get_property(&caller, &id)?;
    Ok(Json(property))
}
