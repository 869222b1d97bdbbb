//! Comment Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::require_non_blank;

/// A comment left on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// The post this comment belongs to
    pub post_id: i64,
    /// The user who wrote the comment
    pub author_id: i64,
}

/// Payload for `POST /posts/{id}/comments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_blank("content", &self.content, "Comment cannot be empty")
    }
}
