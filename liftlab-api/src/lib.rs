//! # Lift Lab API Server Library
//!
//! ## Modules
//!
//! - `app`: Application state, router and bearer-token layer
//! - `config`: Configuration from the environment
//! - `error`: Error handling and HTTP response mapping
//! - `middleware`: Response security headers
//! - `routes`: Route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
