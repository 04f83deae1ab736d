//! # Lift Lab Shared Library
//!
//! This crate contains the data layer and identity primitives used by the
//! Lift Lab API server.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing, identity tokens, login/signup and bearer middleware
//! - `db`: Connection pool and migration runner
//! - `models`: Database models for users, plans, schedules and tracking

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Lift Lab shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
