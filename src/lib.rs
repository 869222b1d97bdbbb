//! Blog Backend - Main Library
//!
//! A small blog service: users register and log in, then create
//! categories, write posts and comment on them over a JSON HTTP API.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that cross the HTTP boundary
//!   - Category, Post and Comment models and request payloads
//!   - Payload validation rules and `SharedError`
//!   - `AppConfig` loading (env, `.env`, TOML)
//!
//! - **`backend`** - Server-side code
//!   - Axum router and handlers
//!   - bcrypt credential store and JWT bearer tokens
//!   - SQLite persistence through sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use blog_backend::backend::server::init::create_app;
//! use blog_backend::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Access Rules
//!
//! - Registration, login, category listing and comment listing are public
//! - Everything else needs `Authorization: Bearer <token>`
//! - Only a post's author may update or delete it
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation
//! - `shared::ConfigError` for configuration
//! - `backend::BackendError` for HTTP responses (`{"error", "status"}` bodies)

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
