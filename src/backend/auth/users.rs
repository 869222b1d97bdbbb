/**
 * User Model and Database Operations
 *
 * This module handles the `users` table. Rows are written once at
 * registration and never updated.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Database-assigned user ID
    pub id: i64,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// Hashed password (bcrypt)
    pub hashed_password: String,
}

/// Public identity of a user
///
/// Returned by registration and `GET /users/me`, and embedded in bearer
/// tokens. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: i64,
    pub username: String,
}

impl From<&User> for UserIdentity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `hashed_password` - bcrypt hash of the password
///
/// # Returns
/// Created user or error. A taken username surfaces as a unique violation.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    hashed_password: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, hashed_password)
        VALUES (?, ?)
        RETURNING id, username, hashed_password
        "#,
    )
    .bind(username)
    .bind(hashed_password)
    .fetch_one(pool)
    .await
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, hashed_password
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, hashed_password
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
