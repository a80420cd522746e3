//! Domain services.
//!
//! Each service takes the caller identity as an explicit parameter and
//! runs it through the role authority before touching a store - there is
//! no ambient "current user". Services are cheap, borrow from [`AppState`],
//! and are constructed per request.
//!
//! [`AppState`]: crate::state::AppState

pub mod contact;
pub mod profiles;
pub mod properties;
pub mod requests;

use thiserror::Error;

pub use contact::ContactService;
pub use profiles::ProfileService;
pub use properties::PropertyService;
pub use requests::RequestService;

use crate::auth::AccessError;

/// Errors a domain operation can return.
///
/// All lookups return a typed `NotFound` rather than panicking for flow
/// control; authorization failures stay distinct from `NotFound` so the
/// presentation layer can tell "access denied" from "does not exist".
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Referenced entity is absent.
    #[error("{0} not found")]
    NotFound(String),

    /// No identity where one is required.
    #[error("caller is not authenticated")]
    Unauthenticated,

    /// Identity present, role insufficient.
    #[error("{0}")]
    Forbidden(String),

    /// Duplicate id on creation.
    #[error("{0}")]
    Conflict(String),

    /// Empty required field.
    #[error("{0}")]
    InvalidInput(String),
}

impl From<AccessError> for ServiceError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthenticated => Self::Unauthenticated,
            AccessError::Forbidden(reason) => Self::Forbidden(reason),
        }
    }
}
