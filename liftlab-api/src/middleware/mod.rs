/// HTTP middleware
///
/// - `security`: Security headers on every response
///
/// Bearer authentication lives in [`crate::app`] next to the router it guards.

pub mod security;
