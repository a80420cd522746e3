//! Plan catalog route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use makeready_core::PlanId;

use crate::error::AppError;
use crate::models::Plan;
use crate::state::AppState;

/// List all pricing plans.
///
/// GET /api/plans
///
/// Public, read-only catalog data.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Plan>> {
    Json(state.catalog().get_all().to_vec())
}

/// Get one pricing plan.
///
/// GET /api/plans/{id}
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<PlanId>,
) -> Result<Json<Plan>, AppError> {
    state
        .catalog()
        .get_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("plan {id}")))
}
