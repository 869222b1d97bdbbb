//! Middleware Module
//!
//! Request-level concerns shared by all routes.
//!
//! - **`auth`** - bearer token gate (`AuthUser` extractor)
//! - **`logging`** - HTTP request tracing layer

/// Bearer token authentication
pub mod auth;

/// Request tracing
pub mod logging;

pub use auth::{bearer_token, AuthUser};
pub use logging::add_tracing;
