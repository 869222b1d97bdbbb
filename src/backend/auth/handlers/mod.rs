//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - Token issuing handler
//! └── me.rs        - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /users - User registration
//! - **`login`** - POST /token - Exchange credentials for a bearer token
//! - **`get_me`** - GET /users/me - Get current user info
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → user created → `{id, username}` returned
//! 2. **Login**: form-encoded username and password → credentials verified → token returned
//! 3. **Get Me**: bearer token → token verified → user info returned

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginForm, RegisterRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use register::register;
