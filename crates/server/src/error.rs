//! Unified error handling for the HTTP surface.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::ServiceError;

/// Application-level error type for the MakeReady API.
///
/// Every failure an operation can produce maps to exactly one of these
/// kinds; nothing is fatal to the process, and a failed operation affects
/// only its own request.
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced entity is absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No identity where one is required.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Identity present, role insufficient.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Duplicate id on creation.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Empty required field or unrecognized enum string.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(what) => Self::NotFound(what),
            ServiceError::Unauthenticated => Self::Unauthenticated("sign in required".to_string()),
            ServiceError::Forbidden(what) => Self::Forbidden(what),
            ServiceError::Conflict(what) => Self::Conflict(what),
            ServiceError::InvalidInput(what) => Self::InvalidInput(what),
        }
    }
}

/// JSON error body returned to the caller.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
