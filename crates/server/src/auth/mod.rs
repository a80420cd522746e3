//! Caller identity resolution and authorization.
//!
//! Every request resolves an identity first ([`CallerIdentity`], which
//! never fails — anonymous is a valid result), then passes through the
//! [`RoleAuthority`] before reaching a store. Authentication itself is an
//! upstream concern: the deployment fronts this service with an
//! identity-aware gateway that verifies credentials and forwards the
//! resulting principal token in a trusted header.

pub mod authority;
pub mod extract;

pub use authority::{AccessError, Operation, RoleAuthority};
pub use extract::{CallerIdentity, PRINCIPAL_HEADER};
