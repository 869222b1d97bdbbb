//! Database and application fixtures
//!
//! Every fixture opens its own in-memory SQLite database with migrations
//! applied, so tests never share state.

use axum_test::TestServer;
use blog_backend::backend::routes::create_router;
use blog_backend::backend::server::config::connect_database;
use blog_backend::backend::server::AppState;
use blog_backend::shared::AppConfig;
use sqlx::SqlitePool;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Configuration used by every test app
///
/// bcrypt cost is the minimum so registration stays fast.
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_JWT_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("test config is valid")
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a fresh in-memory database with the schema applied
    pub async fn new() -> Self {
        let pool = connect_database("sqlite::memory:", 1)
            .await
            .expect("Failed to open test database");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}

/// A running app plus direct access to its database
pub struct TestApp {
    pub server: TestServer,
    pub db: TestDatabase,
    pub config: AppConfig,
}

/// Build the full router over a fresh database
pub async fn spawn_app() -> TestApp {
    let config = test_config();
    let db = TestDatabase::new().await;
    let state = AppState::new(db.pool().clone(), &config);
    let server = TestServer::new(create_router(state)).expect("Failed to start test server");

    TestApp { server, db, config }
}
