//! Core types for MakeReady.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod name;
pub mod principal;
pub mod role;
pub mod status;

pub use id::*;
pub use name::{DisplayName, DisplayNameError};
pub use principal::{Caller, Principal};
pub use role::Role;
pub use status::{RequestStatus, Urgency};
