/**
 * Database Setup
 *
 * This module opens the SQLite pool named by the configuration and applies
 * the schema from `migrations/`.
 *
 * # Connection Rules
 *
 * - Foreign keys are enforced on every connection
 * - File databases (and their parent directory) are created if missing
 * - In-memory databases are pinned to one connection that is never
 *   recycled, since each new connection would open an empty database
 */

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

use crate::shared::AppConfig;

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool for `database_url` and run migrations
///
/// # Errors
///
/// Returns an error if the URL is invalid, the database cannot be opened,
/// or a migration fails.
pub async fn connect_database(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        if let Some(parent) = Path::new(options.get_filename()).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
            }
        }
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Load and initialize the database connection pool from configuration
///
/// # Example
///
/// ```rust,no_run
/// use blog_backend::backend::server::config::load_database;
/// use blog_backend::shared::AppConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::from_env()?;
/// let pool = load_database(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database {}", config.database_url);

    let pool = connect_database(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            tracing::error!("Failed to open database: {}", e);
            e
        })?;

    tracing::info!("Database ready, migrations applied");
    Ok(pool)
}
