#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response, StatusCode};
use axum::Router;
use galaxy_api::{app, ensure_schema, AppState, Backend};
use serde_json::Value;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub type TestApp = NormalizePath<Router>;

/// In-memory SQLite pool with the schema applied.
///
/// A single connection that is never recycled, so every request sees the
/// same in-memory database.
pub async fn test_pool() -> AnyPool {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    ensure_schema(&pool, Backend::Sqlite).await.expect("create schema");
    pool
}

/// Build the full application, middleware included, over a fresh store.
pub async fn build_test_app() -> TestApp {
    build_test_app_with_pool(test_pool().await)
}

pub fn build_test_app_with_pool(pool: AnyPool) -> TestApp {
    app(AppState::new(pool))
}

async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &TestApp, uri: &str, json: Value) -> Response<Body> {
    post_raw(app, uri, &json.to_string()).await
}

pub async fn post_raw(app: &TestApp, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST without a `Content-Type` header.
pub async fn post_untyped(app: &TestApp, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send_method(app: &TestApp, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder().method(Method::DELETE).uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST and return the created entity, asserting 201.
pub async fn create(app: &TestApp, uri: &str, json: Value) -> Value {
    let response = post_json(app, uri, json).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
