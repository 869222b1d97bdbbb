//! Blog HTTP handlers, grouped by resource.

/// Category handlers
pub mod categories;

/// Post handlers
pub mod posts;

/// Comment handlers
pub mod comments;

pub use categories::{create_category, list_categories};
pub use comments::{create_comment, list_comments};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
