//! Blog Module
//!
//! Categories, posts and comments: their database operations, the ownership
//! policy guarding post mutations, and the HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! blog/
//! ├── mod.rs         - Module exports and documentation
//! ├── policy.rs      - Ownership predicate
//! ├── categories.rs  - Category table operations
//! ├── posts.rs       - Post table operations
//! ├── comments.rs    - Comment table operations
//! └── handlers/      - HTTP handlers
//! ```

/// Ownership checks
pub mod policy;

/// Category database operations
pub mod categories;

/// Post database operations
pub mod posts;

/// Comment database operations
pub mod comments;

/// HTTP handlers for blog endpoints
pub mod handlers;

pub use policy::{authorize_mutation, Owned};
