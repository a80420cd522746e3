//! MakeReady Core - Shared types library.
//!
//! This crate provides common types used across all MakeReady components:
//! - `server` - The coordination backend (HTTP service)
//! - `integration-tests` - End-to-end contract tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no locking, no HTTP. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, caller identity, roles,
//!   statuses, and validated display names

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
