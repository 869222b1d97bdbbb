//! Backend Module
//!
//! The HTTP side of the blog: handlers, the bearer-token gate, database
//! access and server assembly.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── server/      - AppState, database setup, app creation
//! ├── routes/      - Route table and router assembly
//! ├── auth/        - Users, credentials, tokens, auth handlers
//! ├── blog/        - Categories, posts, comments and their handlers
//! ├── middleware/  - Bearer token extractor, request tracing
//! ├── extract.rs   - Body, path and query extractors
//! └── error/       - BackendError and its HTTP mapping
//! ```
//!
//! # Request Flow
//!
//! client → router → (`AuthUser` token check) → handler → SQLite → JSON

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Categories, posts and comments
pub mod blog;

/// Middleware for request processing
pub mod middleware;

/// Request extractors with JSON error rejections
pub mod extract;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
