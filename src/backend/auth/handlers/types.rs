/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * registration and token handlers.
 */

use serde::{Deserialize, Serialize};

pub use crate::backend::auth::users::UserIdentity as UserResponse;

/// Registration request (JSON body of `POST /users`)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request (form body of `POST /token`)
///
/// Field names follow the OAuth2 password grant.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Token response
///
/// Returned by the login handler in OAuth2 bearer token shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    /// Signed JWT for the `Authorization: Bearer` header
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
