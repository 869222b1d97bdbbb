//! Shared Error Types
//!
//! This module defines the validation errors raised while checking request
//! payloads. They carry no HTTP knowledge; the backend maps them onto
//! `422 Unprocessable Entity`.
//!
//! # Error Categories
//!
//! - `ValidationError` - A named field failed a validation rule
//! - `InvalidInput` - The payload as a whole could not be read
//!
//! # Usage
//!
//! ```rust
//! use blog_backend::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Field cannot be empty");
//! ```
use thiserror::Error;

/// Validation failures for incoming payloads
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A single field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The payload could not be parsed at all (bad JSON, bad form, bad path)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
