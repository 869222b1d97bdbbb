/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /users.
 *
 * # Registration Process
 *
 * 1. Validate username format and password length
 * 2. Reject a username that is already taken
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Return the new user's public identity
 *
 * Registration does not log the user in; clients call `POST /token` next.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::credentials::{self, PasswordHasher};
use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;

/// Register handler
///
/// # Errors
///
/// * `409 Conflict` - If the username is already taken
/// * `422 Unprocessable Entity` - If the username or password is invalid
/// * `500 Internal Server Error` - If password hashing or user creation fails
///
/// # Example Request
///
/// ```http
/// POST /users HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "pw1"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": 1,
///   "username": "alice"
/// }
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    tracing::info!("Registration request for username: {}", request.username);

    let identity =
        credentials::register(&pool, &hasher, &request.username, &request.password).await?;

    Ok(Json(identity))
}
