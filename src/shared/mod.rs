//! Shared Module
//!
//! This module contains the types that cross the HTTP boundary: the blog
//! entities and their request payloads, the validation rules applied to those
//! payloads, and the application configuration. None of it touches axum, so
//! clients and tests can depend on it directly.

/// Blog entities and request payloads
pub mod blog;

/// Shared error types
pub mod error;

/// Payload validation rules
pub mod validation;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use blog::{Category, Comment, Post};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
