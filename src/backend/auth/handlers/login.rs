/**
 * Login Handler
 *
 * This module implements the token endpoint, POST /token.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a signed JWT
 *
 * # Security
 *
 * - Invalid credentials return 401 Unauthorized (no information leakage)
 * - Tokens expire after the configured TTL (30 minutes by default)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::credentials::{self, PasswordHasher};
use crate::backend::auth::handlers::types::{LoginForm, TokenResponse};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::BackendError;
use crate::backend::extract::FormBody;

/// Login handler
///
/// Accepts `application/x-www-form-urlencoded` credentials.
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `415 Unsupported Media Type` - If the body is not form-encoded
/// * `422 Unprocessable Entity` - If a form field is missing
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /token HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// username=alice&password=pw1
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "bearer"
/// }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    State(tokens): State<TokenIssuer>,
    FormBody(form): FormBody<LoginForm>,
) -> Result<Json<TokenResponse>, BackendError> {
    tracing::info!("Login request for: {}", form.username);

    let identity = credentials::verify(&pool, &hasher, &form.username, &form.password).await?;

    let token = tokens.issue(&identity).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal("Failed to create token")
    })?;

    tracing::info!("User logged in successfully: {}", identity.username);

    Ok(Json(TokenResponse::bearer(token)))
}
