/**
 * Server Initialization
 *
 * This module builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and apply migrations
 * 2. Build `AppState` (pool, token issuer, password hasher)
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated. Unlike optional
/// services, the blog cannot run without its database.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing blog backend server");

    let db = load_database(config).await?;
    let app_state = AppState::new(db, config);

    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
