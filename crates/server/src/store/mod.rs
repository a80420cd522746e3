//! Keyed in-memory collections, one per entity type.
//!
//! # Collections
//!
//! - `profiles` - principal → user profile (role source of truth)
//! - `properties` - property id → property
//! - `requests` - request id → service request
//! - `contact` - contact form id → submission (append-only)
//!
//! Persistence technology is an external collaborator concern; the core's
//! contract is only that each collection is a durable keyed mapping. Every
//! collection serializes writes behind a single `RwLock` (a superset of the
//! required per-key single-writer guarantee) and no store operation awaits
//! while holding a guard. Reads clone whole records under the read guard,
//! so a caller never observes a partially-updated record: status and
//! `updated_at` change under one write guard.

pub mod contact;
pub mod profiles;
pub mod properties;
pub mod requests;

use thiserror::Error;

pub use contact::ContactStore;
pub use profiles::ProfileStore;
pub use properties::PropertyStore;
pub use requests::RequestStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Key collision on creation (e.g., duplicate property id).
    #[error("conflict: {0}")]
    Conflict(String),
}
