/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once at startup from an `AppConfig` and holds:
 * - the SQLite connection pool
 * - the token issuer (signing secret and TTL)
 * - the password hasher (bcrypt cost)
 *
 * There are no module-level singletons; everything a handler needs comes
 * through this struct.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for just the part they
 * use, e.g. `State(pool): State<SqlitePool>`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::credentials::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::shared::AppConfig;

/// Shared state handed to every request handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Issues and validates bearer tokens
    pub tokens: TokenIssuer,

    /// Hashes and checks passwords
    pub passwords: PasswordHasher,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &AppConfig) -> Self {
        Self {
            db,
            tokens: TokenIssuer::from_config(config),
            passwords: PasswordHasher::new(config.bcrypt_cost),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}
