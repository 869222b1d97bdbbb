/**
 * Session Tokens
 *
 * This module issues and validates the signed bearer tokens handed out by
 * `POST /token`.
 *
 * # Token Format
 *
 * HS256 JWTs carrying the caller's id (`sub`, decimal string), username,
 * issue and expiry times (unix seconds) and a random `jti`. Validation is a
 * pure function of the token string and the signing secret: no revocation
 * list, no database lookup, zero leeway on expiry.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::backend::auth::users::UserIdentity;
use crate::shared::AppConfig;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Unique token ID
    pub jti: String,
}

/// Reasons a bearer token is rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is malformed: {0}")]
    Malformed(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

/// Issues and validates bearer tokens with a server-held secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.jwt_secret, Duration::minutes(config.token_ttl_minutes))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for a user, valid from now until the configured TTL elapses
    pub fn issue(&self, identity: &UserIdentity) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(identity, Utc::now())
    }

    /// Create a token as if it had been issued at `issued_at`
    pub fn issue_at(
        &self,
        identity: &UserIdentity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: identity.id.to_string(),
            username: identity.username.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and decode its claims
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Verify a token and return the identity it was issued to
    pub fn validate(&self, token: &str) -> Result<UserIdentity, TokenError> {
        let claims = self.decode_claims(token)?;
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|e| TokenError::Malformed(format!("invalid subject: {e}")))?;

        Ok(UserIdentity {
            id,
            username: claims.username,
        })
    }
}
