//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - Database and app fixtures
//! - Authentication helpers
//! - Custom assertion macros
#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
