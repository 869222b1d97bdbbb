/**
 * Comment Database Operations
 *
 * Comments are append-only: there is no update or delete. They disappear
 * with their post.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::Comment;

pub async fn create_comment(
    pool: &SqlitePool,
    post_id: i64,
    author_id: i64,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, created_at, post_id, author_id)
        VALUES (?, ?, ?, ?)
        RETURNING id, content, created_at, post_id, author_id
        "#,
    )
    .bind(content)
    .bind(Utc::now())
    .bind(post_id)
    .bind(author_id)
    .fetch_one(pool)
    .await
}

/// Comments on a post in insertion order
pub async fn list_comments_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, created_at, post_id, author_id
        FROM comments
        WHERE post_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}
