//! Post Data Structure
//!
//! Represents a blog post and the payloads used to create, update and list
//! posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::require_non_blank;

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    /// Database-assigned ID
    pub id: i64,
    pub title: String,
    pub content: String,
    /// When the post was first written (UTC)
    pub created_at: DateTime<Utc>,
    /// The user who wrote the post; only they may change it
    pub author_id: i64,
    /// Optional category the post is filed under
    pub category_id: Option<i64>,
}

/// Payload for `POST /posts` and `PUT /posts/{id}`
///
/// An update replaces all three fields, so omitting `category_id` on `PUT`
/// clears the post's category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl PostRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_blank("title", &self.title, "Field cannot be empty")?;
        require_non_blank("content", &self.content, "Field cannot be empty")
    }
}

/// Query string accepted by `GET /posts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    pub category_id: Option<i64>,
}

/// Body returned by `DELETE /posts/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletePostResponse {
    pub message: String,
}

impl DeletePostResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Post deleted".to_string(),
        }
    }
}
