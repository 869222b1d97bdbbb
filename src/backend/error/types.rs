/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler. Each
 * variant maps to exactly one status code.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Conflict` - duplicate username or category name (409)
 * - `Unauthorized` - bad credentials, missing or invalid token (401)
 * - `Forbidden` - caller does not own the resource (403)
 * - `NotFound` - referenced row does not exist (404)
 * - `SharedError` - payload failed validation (422)
 * - `HandlerError` - request rejected with an explicit status (e.g. 415)
 *
 * ## Server Errors
 *
 * Storage and hashing failures are reported as 500 with a generic message.
 * The underlying error is logged when the response is built and never sent
 * to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use blog_backend::backend::error::BackendError;
///
/// let err = BackendError::not_found("Post not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request rejected with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// A unique value is already taken
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Credentials or bearer token were rejected
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The caller is authenticated but may not touch this resource
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// The referenced resource does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Payload validation failure
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Bearer token validation failure
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Any other server-side failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Conflict` - 409 Conflict
    /// - `Unauthorized`, `Token` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `SharedError` - 422 Unprocessable Entity
    /// - `Database`, `PasswordHash`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unauthorized { .. } | Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::PasswordHash(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message sent to the client
    ///
    /// Server-side failures collapse to a generic message.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. }
            | Self::Conflict { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::Token(_) => "Could not validate credentials".to_string(),
            Self::Database(_) | Self::PasswordHash(_) | Self::Internal { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    /// Whether a unique constraint rejected the write
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}
