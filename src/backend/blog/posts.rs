/**
 * Post Database Operations
 *
 * Free functions over the `posts` table. Ownership is not checked here;
 * callers run `policy::authorize_mutation` on the loaded row before
 * `update_post` or `delete_post`.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::blog::PostRequest;
use crate::shared::Post;

/// Insert a post written by `author_id`
pub async fn create_post(
    pool: &SqlitePool,
    author_id: i64,
    request: &PostRequest,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, created_at, author_id, category_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, title, content, created_at, author_id, category_id
        "#,
    )
    .bind(&request.title)
    .bind(&request.content)
    .bind(Utc::now())
    .bind(author_id)
    .bind(request.category_id)
    .fetch_one(pool)
    .await
}

/// Posts written by `author_id`, optionally restricted to one category
///
/// Results are in insertion order.
pub async fn list_posts_by_author(
    pool: &SqlitePool,
    author_id: i64,
    category_id: Option<i64>,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, created_at, author_id, category_id
        FROM posts
        WHERE author_id = ?1
          AND (?2 IS NULL OR category_id = ?2)
        ORDER BY id ASC
        "#,
    )
    .bind(author_id)
    .bind(category_id)
    .fetch_all(pool)
    .await
}

pub async fn get_post(pool: &SqlitePool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, created_at, author_id, category_id
        FROM posts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Replace a post's title, content and category
///
/// Returns `None` if the post no longer exists.
pub async fn update_post(
    pool: &SqlitePool,
    id: i64,
    request: &PostRequest,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = ?, content = ?, category_id = ?
        WHERE id = ?
        RETURNING id, title, content, created_at, author_id, category_id
        "#,
    )
    .bind(&request.title)
    .bind(&request.content)
    .bind(request.category_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a post and, through the foreign key, its comments
///
/// Returns whether a row was removed.
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
