/**
 * API Route Table
 *
 * This module maps every (method, path) pair to its handler.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /users` - User registration
 * - `POST /token` - Exchange form-encoded credentials for a bearer token
 * - `GET /users/me` - Current user (requires authentication)
 *
 * ## Blog
 * - `POST /categories` - Create category (requires authentication)
 * - `GET /categories` - List categories
 * - `POST /posts` - Create post (requires authentication)
 * - `GET /posts?category_id=` - List caller's posts (requires authentication)
 * - `GET /posts/{id}` - Fetch post (requires authentication)
 * - `PUT /posts/{id}` - Update post (author only)
 * - `DELETE /posts/{id}` - Delete post (author only)
 * - `POST /posts/{id}/comments` - Add comment (requires authentication)
 * - `GET /posts/{id}/comments` - List comments
 *
 * ## Operations
 * - `GET /health` - Liveness probe
 *
 * Authentication is enforced per handler by the `AuthUser` extractor, so
 * public and protected methods can share a path.
 */

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{get_me, login, register};
use crate::backend::blog::handlers::{
    create_category, create_comment, create_post, delete_post, get_post, list_categories,
    list_comments, list_posts, update_post,
};
use crate::backend::server::state::AppState;

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Add the authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users", post(register))
        .route("/users/me", get(get_me))
        .route("/token", post(login))
}

/// Add the category, post and comment routes
pub fn configure_blog_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/categories", post(create_category).get(list_categories))
        .route("/posts", post(create_post).get(list_posts))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route(
            "/posts/{id}/comments",
            post(create_comment).get(list_comments),
        )
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    let router = configure_auth_routes(router);
    let router = configure_blog_routes(router);
    router.route("/health", get(health))
}
