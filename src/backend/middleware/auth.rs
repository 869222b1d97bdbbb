/**
 * Authentication Gate
 *
 * This module provides the `AuthUser` extractor used by every protected
 * handler. It reads the bearer token from the `Authorization` header,
 * validates it with the server's `TokenIssuer`, and hands the embedded
 * identity to the handler. Any failure rejects the request with 401 before
 * the handler body runs.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::UserIdentity;
use crate::backend::error::BackendError;

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Not authenticated")
        })?;

    let (scheme, token) = auth_header.split_once(' ').ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized("Not authenticated")
    })?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        tracing::warn!("Invalid Authorization header format");
        return Err(BackendError::unauthorized("Not authenticated"));
    }

    Ok(token)
}

/// Axum extractor for the authenticated caller
///
/// Usable with any state that can hand out a `TokenIssuer`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub UserIdentity);

impl<S> FromRequestParts<S> for AuthUser
where
    TokenIssuer: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let issuer = TokenIssuer::from_ref(state);

        let identity = issuer.validate(token).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            BackendError::from(e)
        })?;

        Ok(AuthUser(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use chrono::Duration;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("middleware-secret", Duration::minutes(30))
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/posts");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");

        headers.insert(AUTHORIZATION, "bearer abc".parse().unwrap());
        assert_eq!(bearer_token(&headers).unwrap(), "abc");
    }

    #[test]
    fn test_bearer_token_rejections() {
        let headers = HeaderMap::new();
        assert_eq!(
            bearer_token(&headers).unwrap_err().status_code(),
            StatusCode::UNAUTHORIZED
        );

        for value in ["Basic dXNlcjpwdw==", "Bearer", "Bearer   ", "token"] {
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value.parse().unwrap());
            assert!(bearer_token(&headers).is_err(), "accepted {value:?}");
        }
    }

    #[tokio::test]
    async fn test_extractor_accepts_valid_token() {
        let issuer = issuer();
        let identity = UserIdentity {
            id: 1,
            username: "alice".to_string(),
        };
        let token = issuer.issue(&identity).unwrap();
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));

        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &issuer)
            .await
            .unwrap();
        assert_eq!(user, identity);
    }

    #[tokio::test]
    async fn test_extractor_rejects_missing_header() {
        let mut parts = parts_with_auth(None);
        let err = AuthUser::from_request_parts(&mut parts, &issuer())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_extractor_rejects_invalid_token() {
        let mut parts = parts_with_auth(Some("Bearer invalid_token"));
        let err = AuthUser::from_request_parts(&mut parts, &issuer())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
