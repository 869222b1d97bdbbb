/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /users/me, which returns the
 * identity of the caller named by the bearer token.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - If Authorization header is missing or token is invalid
/// * `404 Not Found` - If the token names a user that no longer exists
/// * `500 Internal Server Error` - If the database query fails
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&pool, caller.id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", caller.id);
        BackendError::not_found("User not found")
    })?;

    Ok(Json(UserResponse::from(&user)))
}
