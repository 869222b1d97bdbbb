//! Authentication test helpers
//!
//! Register users and obtain tokens through the real HTTP endpoints.

use axum::http::StatusCode;
use axum_test::TestServer;
use blog_backend::backend::auth::{TokenIssuer, TokenResponse, UserIdentity};
use blog_backend::shared::AppConfig;
use chrono::{DateTime, Utc};

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// `POST /users`, asserting success
pub async fn register_user(server: &TestServer, username: &str, password: &str) -> UserIdentity {
    let response = server
        .post("/users")
        .json(&serde_json::json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());
    response.json()
}

/// `POST /token`, asserting success
pub async fn login_user(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .form(&[("username", username), ("password", password)])
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());
    let body: TokenResponse = response.json();
    assert_eq!(body.token_type, "bearer");
    body.access_token
}

/// Register and log in a user
pub async fn create_test_user(server: &TestServer, username: &str, password: &str) -> TestUser {
    let identity = register_user(server, username, password).await;
    let token = login_user(server, username, password).await;

    TestUser {
        id: identity.id,
        username: identity.username,
        password: password.to_string(),
        token,
    }
}

/// Sign a token for `identity` as if issued at `issued_at`
pub fn token_issued_at(config: &AppConfig, identity: &UserIdentity, issued_at: DateTime<Utc>) -> String {
    TokenIssuer::from_config(config)
        .issue_at(identity, issued_at)
        .expect("Failed to sign test token")
}
