//! Category Data Structure

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::require_non_blank;

/// A category posts can be filed under
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    /// Database-assigned ID
    pub id: i64,
    /// Unique category name
    pub name: String,
}

/// Payload for `POST /categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_blank("name", &self.name, "Field cannot be empty")
    }
}
