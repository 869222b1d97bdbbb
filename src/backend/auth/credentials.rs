/**
 * Credential Store
 *
 * This module maps usernames to bcrypt password hashes.
 *
 * # Operations
 *
 * - `register` - validate, hash and store a new user
 * - `verify` - check a username/password pair
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at a configurable cost
 * - Hashing runs on the blocking thread pool
 * - Unknown usernames and wrong passwords produce the same 401
 */

use sqlx::SqlitePool;

use crate::backend::auth::users::{create_user, get_user_by_username, UserIdentity};
use crate::backend::error::BackendError;
use crate::shared::validation::{validate_password, validate_username};

/// Message returned for any failed login
pub const INVALID_CREDENTIALS: &str = "Incorrect username or password";

/// bcrypt hashing at a fixed work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, password: &str) -> Result<String, BackendError> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| BackendError::internal(format!("hashing task failed: {e}")))?
            .map_err(BackendError::from)
    }

    pub async fn verify(&self, password: &str, hashed: &str) -> Result<bool, BackendError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed))
            .await
            .map_err(|e| BackendError::internal(format!("verification task failed: {e}")))?
            .map_err(BackendError::from)
    }
}

/// Register a new user
///
/// # Errors
///
/// * `SharedError` (422) - username or password fails validation
/// * `Conflict` (409) - username already taken
/// * `Database`/`PasswordHash` (500) - storage or hashing failure
pub async fn register(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<UserIdentity, BackendError> {
    validate_username(username)?;
    validate_password(password)?;

    if get_user_by_username(pool, username).await?.is_some() {
        tracing::warn!("Username already exists: {}", username);
        return Err(BackendError::conflict("Username already registered"));
    }

    let hashed_password = hasher.hash(password).await?;

    let user = create_user(pool, username, &hashed_password)
        .await
        .map_err(BackendError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                tracing::warn!("Username taken concurrently: {}", username);
                BackendError::conflict("Username already registered")
            } else {
                e
            }
        })?;

    tracing::info!("User registered: {} (id {})", user.username, user.id);
    Ok(UserIdentity::from(&user))
}

/// Check a username/password pair
///
/// # Errors
///
/// * `Unauthorized` (401) - unknown username or wrong password
/// * `Database`/`PasswordHash` (500) - storage or hashing failure
pub async fn verify(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<UserIdentity, BackendError> {
    let Some(user) = get_user_by_username(pool, username).await? else {
        tracing::warn!("Login attempt for unknown user: {}", username);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    };

    if !hasher.verify(password, &user.hashed_password).await? {
        tracing::warn!("Invalid password for user: {}", username);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    Ok(UserIdentity::from(&user))
}
