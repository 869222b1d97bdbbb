/**
 * Post Handlers
 *
 * All post routes require a bearer token.
 *
 * # Access Rules
 *
 * - Listing returns only the caller's own posts
 * - A single post is visible only to its author (404 for anyone else)
 * - Only the author may update or delete a post
 *
 * A `category_id` in a create or update body must name an existing category.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::blog::policy::{authorize_mutation, authorize_read};
use crate::backend::blog::{categories, posts};
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonBody, PathParam, QueryParams};
use crate::backend::middleware::AuthUser;
use crate::shared::blog::{DeletePostResponse, PostListQuery, PostRequest};
use crate::shared::Post;

async fn ensure_category_exists(
    pool: &SqlitePool,
    category_id: Option<i64>,
) -> Result<(), BackendError> {
    if let Some(id) = category_id {
        if categories::get_category(pool, id).await?.is_none() {
            tracing::warn!("Category not found: {}", id);
            return Err(BackendError::not_found("Category not found"));
        }
    }
    Ok(())
}

async fn load_post(pool: &SqlitePool, id: i64) -> Result<Post, BackendError> {
    posts::get_post(pool, id).await?.ok_or_else(|| {
        tracing::warn!("Post not found: {}", id);
        BackendError::not_found("Post not found")
    })
}

/// `POST /posts`
pub async fn create_post(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    JsonBody(request): JsonBody<PostRequest>,
) -> Result<Json<Post>, BackendError> {
    request.validate()?;
    ensure_category_exists(&pool, request.category_id).await?;

    let post = posts::create_post(&pool, caller.id, &request).await?;

    tracing::info!("Post {} created by user {}", post.id, caller.id);
    Ok(Json(post))
}

/// `GET /posts?category_id=`
pub async fn list_posts(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    QueryParams(query): QueryParams<PostListQuery>,
) -> Result<Json<Vec<Post>>, BackendError> {
    let posts = posts::list_posts_by_author(&pool, caller.id, query.category_id).await?;
    Ok(Json(posts))
}

/// `GET /posts/{id}`
pub async fn get_post(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Post>, BackendError> {
    let post = load_post(&pool, id).await?;
    authorize_read(&caller, &post)?;
    Ok(Json(post))
}

/// `PUT /posts/{id}`
///
/// The body is validated before the post is looked up.
///
/// # Errors
///
/// * `422 Unprocessable Entity` - blank title or content
/// * `404 Not Found` - no such post, or no such category
/// * `403 Forbidden` - caller is not the author
pub async fn update_post(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    PathParam(id): PathParam<i64>,
    JsonBody(request): JsonBody<PostRequest>,
) -> Result<Json<Post>, BackendError> {
    request.validate()?;

    let existing = load_post(&pool, id).await?;
    authorize_mutation(&caller, &existing)?;
    ensure_category_exists(&pool, request.category_id).await?;

    let post = posts::update_post(&pool, id, &request)
        .await?
        .ok_or_else(|| BackendError::not_found("Post not found"))?;

    tracing::info!("Post {} updated by user {}", post.id, caller.id);
    Ok(Json(post))
}

/// `DELETE /posts/{id}`
///
/// Comments on the post are removed with it.
pub async fn delete_post(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    PathParam(id): PathParam<i64>,
) -> Result<Json<DeletePostResponse>, BackendError> {
    let existing = load_post(&pool, id).await?;
    authorize_mutation(&caller, &existing)?;

    if !posts::delete_post(&pool, id).await? {
        return Err(BackendError::not_found("Post not found"));
    }

    tracing::info!("Post {} deleted by user {}", id, caller.id);
    Ok(Json(DeletePostResponse::deleted()))
}
