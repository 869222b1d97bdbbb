//! Authentication Module
//!
//! This module handles user registration, credential checks and bearer
//! tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── credentials.rs  - Password hashing, register and verify
//! ├── sessions.rs     - JWT issuing and validation
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after the configured TTL (30 minutes by default)
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// Credential store
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::PasswordHasher;
pub use handlers::{get_me, login, register};
pub use handlers::{LoginForm, RegisterRequest, TokenResponse};
pub use sessions::{Claims, TokenError, TokenIssuer};
pub use users::{User, UserIdentity};
