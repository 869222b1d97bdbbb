//! Category handlers: `POST /categories` (authenticated) and
//! `GET /categories` (public).

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::blog::categories;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::shared::blog::CreateCategoryRequest;
use crate::shared::Category;

/// Create a category
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token
/// * `409 Conflict` - a category with this name exists
/// * `422 Unprocessable Entity` - blank or missing name
pub async fn create_category(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    JsonBody(request): JsonBody<CreateCategoryRequest>,
) -> Result<Json<Category>, BackendError> {
    request.validate()?;

    let category = categories::create_category(&pool, &request.name)
        .await
        .map_err(BackendError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                tracing::warn!("Category already exists: {}", request.name);
                BackendError::conflict("Category already exists")
            } else {
                e
            }
        })?;

    tracing::info!(
        "Category {} ({}) created by user {}",
        category.id,
        category.name,
        caller.id
    );
    Ok(Json(category))
}

pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Category>>, BackendError> {
    Ok(Json(categories::list_categories(&pool).await?))
}
