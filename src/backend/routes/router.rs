/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * 1. API routes (auth, blog, health)
 * 2. JSON 404 fallback for unknown paths
 * 3. HTTP request tracing
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::middleware::add_tracing;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Database pool, token issuer and password hasher
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router.fallback(not_found);

    let router = add_tracing(router);

    router.with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_database;
    use crate::shared::AppConfig;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    async fn server() -> TestServer {
        let config = AppConfig::builder()
            .jwt_secret("router-secret")
            .database_url("sqlite::memory:")
            .bcrypt_cost(4)
            .build()
            .unwrap();
        let pool = connect_database(&config.database_url, 1).await.unwrap();
        TestServer::new(create_router(AppState::new(pool, &config))).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let server = server().await;

        let response = server.get("/health").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_404() {
        let server = server().await;

        let response = server.get("/nope").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_public_and_protected_methods_share_a_path() {
        let server = server().await;

        server.get("/categories").await.assert_status_ok();

        let response = server
            .post("/categories")
            .json(&serde_json::json!({ "name": "Tech" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }
}
