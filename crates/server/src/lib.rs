//! MakeReady server library.
//!
//! This crate provides the coordination backend as a library, allowing it
//! to be tested and reused. The binary in `main.rs` wires configuration,
//! telemetry, and graceful shutdown around [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
