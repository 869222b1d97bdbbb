//! Post and category API integration tests

mod common;

use axum::http::StatusCode;
use blog_backend::shared::{Category, Post};
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;

async fn create_category(app: &TestApp, user: &TestUser, name: &str) -> Category {
    let response = app
        .server
        .post("/categories")
        .authorization_bearer(&user.token)
        .json(&json!({ "name": name }))
        .await;
    response.assert_status_ok();
    response.json()
}

async fn create_post(app: &TestApp, user: &TestUser, title: &str, category_id: Option<i64>) -> Post {
    let response = app
        .server
        .post("/posts")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": title, "content": "C", "category_id": category_id }))
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_categories_are_public_to_list() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;

    let tech = create_category(&app, &alice, "Tech").await;
    let life = create_category(&app, &alice, "Life").await;

    let response = app.server.get("/categories").await;
    response.assert_status_ok();
    let listed: Vec<Category> = response.json();
    assert_eq!(listed, vec![tech, life]);
}

#[tokio::test]
async fn test_category_rules() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;
    create_category(&app, &alice, "Tech").await;

    let anonymous = app
        .server
        .post("/categories")
        .json(&json!({ "name": "Life" }))
        .await;
    assert_unauthorized!(anonymous);

    let duplicate = app
        .server
        .post("/categories")
        .authorization_bearer(&alice.token)
        .json(&json!({ "name": "Tech" }))
        .await;
    assert_api_error!(duplicate, StatusCode::CONFLICT);

    let blank = app
        .server
        .post("/categories")
        .authorization_bearer(&alice.token)
        .json(&json!({ "name": "" }))
        .await;
    assert_api_error!(blank, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_post_shape() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;

    let response = app
        .server
        .post("/posts")
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "T", "content": "C" }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["title"], "T");
    assert_eq!(body["content"], "C");
    assert_eq!(body["author_id"], alice.id);
    assert!(body["category_id"].is_null());
    let created_at = body["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_create_post_with_unknown_category() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;

    let response = app
        .server
        .post("/posts")
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "T", "content": "C", "category_id": 99 }))
        .await;

    assert_api_error!(response, StatusCode::NOT_FOUND, "Category not found");
}

#[tokio::test]
async fn test_list_filters_by_category_and_owner() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;
    let bob = create_test_user(&app.server, "bobby", "pw2").await;
    let tech = create_category(&app, &alice, "Tech").await;
    let life = create_category(&app, &alice, "Life").await;

    let tech_post = create_post(&app, &alice, "tech", Some(tech.id)).await;
    let life_post = create_post(&app, &alice, "life", Some(life.id)).await;
    create_post(&app, &bob, "bob's tech", Some(tech.id)).await;

    let response = app
        .server
        .get("/posts")
        .authorization_bearer(&alice.token)
        .add_query_param("category_id", tech.id)
        .await;
    response.assert_status_ok();
    let filtered: Vec<Post> = response.json();
    assert_eq!(filtered, vec![tech_post.clone()]);

    let response = app
        .server
        .get("/posts")
        .authorization_bearer(&alice.token)
        .await;
    let all: Vec<Post> = response.json();
    assert_eq!(all, vec![tech_post, life_post]);
}

#[tokio::test]
async fn test_list_with_bad_query_value() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;

    let response = app
        .server
        .get("/posts")
        .authorization_bearer(&alice.token)
        .add_query_param("category_id", "tech")
        .await;

    assert_api_error!(response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_post() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;
    let bob = create_test_user(&app.server, "bobby", "pw2").await;
    let post = create_post(&app, &alice, "T", None).await;

    let response = app
        .server
        .get(&format!("/posts/{}", post.id))
        .authorization_bearer(&alice.token)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Post>(), post);

    let other_user = app
        .server
        .get(&format!("/posts/{}", post.id))
        .authorization_bearer(&bob.token)
        .await;
    assert_api_error!(other_user, StatusCode::NOT_FOUND, "Post not found");

    let missing = app
        .server
        .get("/posts/4040")
        .authorization_bearer(&alice.token)
        .await;
    assert_api_error!(missing, StatusCode::NOT_FOUND, "Post not found");

    let bad_id = app
        .server
        .get("/posts/abc")
        .authorization_bearer(&alice.token)
        .await;
    assert_api_error!(bad_id, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_post_by_author() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;
    let tech = create_category(&app, &alice, "Tech").await;
    let post = create_post(&app, &alice, "T", None).await;

    let response = app
        .server
        .put(&format!("/posts/{}", post.id))
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "T2", "content": "C2", "category_id": tech.id }))
        .await;
    response.assert_status_ok();

    let updated: Post = response.json();
    assert_eq!(updated.id, post.id);
    assert_eq!(updated.title, "T2");
    assert_eq!(updated.content, "C2");
    assert_eq!(updated.category_id, Some(tech.id));
    assert_eq!(updated.created_at, post.created_at);
}

#[tokio::test]
async fn test_other_user_cannot_update_or_delete() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;
    let bob = create_test_user(&app.server, "bobby", "pw2").await;
    let post = create_post(&app, &alice, "T", None).await;
    let path = format!("/posts/{}", post.id);

    let update = app
        .server
        .put(&path)
        .authorization_bearer(&bob.token)
        .json(&json!({ "title": "mine now", "content": "C" }))
        .await;
    assert_api_error!(update, StatusCode::FORBIDDEN);

    let delete = app
        .server
        .delete(&path)
        .authorization_bearer(&bob.token)
        .await;
    assert_api_error!(delete, StatusCode::FORBIDDEN);

    let unchanged: Post = app
        .server
        .get(&path)
        .authorization_bearer(&alice.token)
        .await
        .json();
    assert_eq!(unchanged, post);
}

#[tokio::test]
async fn test_update_and_delete_missing_post() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;

    let update = app
        .server
        .put("/posts/77")
        .authorization_bearer(&alice.token)
        .json(&json!({ "title": "T", "content": "C" }))
        .await;
    assert_api_error!(update, StatusCode::NOT_FOUND);

    let delete = app
        .server
        .delete("/posts/77")
        .authorization_bearer(&alice.token)
        .await;
    assert_api_error!(delete, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_post_by_author() {
    let app = spawn_app().await;
    let alice = create_test_user(&app.server, "alice", "pw1").await;
    let post = create_post(&app, &alice, "T", None).await;
    let path = format!("/posts/{}", post.id);

    let response = app
        .server
        .delete(&path)
        .authorization_bearer(&alice.token)
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Post deleted" }));

    let gone = app
        .server
        .get(&path)
        .authorization_bearer(&alice.token)
        .await;
    assert_api_error!(gone, StatusCode::NOT_FOUND);
}
