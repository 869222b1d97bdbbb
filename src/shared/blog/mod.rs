//! Blog Module
//!
//! This module contains the data structures exchanged by the blog endpoints:
//!
//! - `Category` - A named grouping for posts
//! - `Post` - An article written by a user
//! - `Comment` - A reply attached to a post
//!
//! Each entity comes with the request payload used to create it. Payloads
//! expose a `validate` method that is called before anything is written.
//!
//! # Usage
//!
//! ```rust
//! use blog_backend::shared::blog::{Category, Post, Comment, PostRequest};
//! ```

pub mod category;
pub mod post;
pub mod comment;

// Re-export all types
pub use category::{Category, CreateCategoryRequest};
pub use post::{DeletePostResponse, Post, PostListQuery, PostRequest};
pub use comment::{Comment, CreateCommentRequest};
