//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Route table
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use blog_backend::backend::routes::create_router;
//! use blog_backend::backend::server::{config::load_database, AppState};
//! use blog_backend::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let pool = load_database(&config).await?;
//! let router = create_router(AppState::new(pool, &config));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Route table
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
