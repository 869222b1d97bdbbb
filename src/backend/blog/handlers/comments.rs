//! Comment handlers.
//!
//! Adding a comment needs a bearer token; listing a post's comments is
//! public. Both return 404 when the post does not exist.

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::blog::{comments, posts};
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonBody, PathParam};
use crate::backend::middleware::AuthUser;
use crate::shared::blog::CreateCommentRequest;
use crate::shared::Comment;

async fn ensure_post_exists(pool: &SqlitePool, post_id: i64) -> Result<(), BackendError> {
    if posts::get_post(pool, post_id).await?.is_none() {
        tracing::warn!("Post not found: {}", post_id);
        return Err(BackendError::not_found("Post not found"));
    }
    Ok(())
}

/// `POST /posts/{id}/comments`
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    PathParam(post_id): PathParam<i64>,
    JsonBody(request): JsonBody<CreateCommentRequest>,
) -> Result<Json<Comment>, BackendError> {
    ensure_post_exists(&pool, post_id).await?;
    request.validate()?;

    let comment = comments::create_comment(&pool, post_id, caller.id, &request.content).await?;

    tracing::info!(
        "Comment {} added to post {} by user {}",
        comment.id,
        post_id,
        caller.id
    );
    Ok(Json(comment))
}

/// `GET /posts/{id}/comments`
pub async fn list_comments(
    State(pool): State<SqlitePool>,
    PathParam(post_id): PathParam<i64>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    ensure_post_exists(&pool, post_id).await?;
    Ok(Json(comments::list_comments_for_post(&pool, post_id).await?))
}
