//! Tests for the sitemap, health checks and fallback.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, build_test_app_with_pool, get, send_method, test_pool};
use serde_json::json;

#[tokio::test]
async fn sitemap_lists_registered_routes() {
    let app = build_test_app().await;
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let routes = json.as_array().unwrap();
    assert_eq!(routes[0], json!({"path": "/", "methods": ["GET"]}));
    assert!(routes.contains(&json!({"path": "/user", "methods": ["GET", "POST"]})));
    assert!(routes.contains(&json!({"path": "/galaxy/{id}", "methods": ["DELETE"]})));
    assert!(routes.contains(&json!({"path": "/character", "methods": ["GET", "POST"]})));
}

#[tokio::test]
async fn health_and_ready_report_ok() {
    let app = build_test_app().await;
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));

    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok", "database": "ok"}));
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = build_test_app().await;
    let response = get(&app, "/spaceship").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"msg": "Not found"}));
}

#[tokio::test]
async fn ready_reports_degraded_when_pool_is_closed() {
    let pool = test_pool().await;
    let app = build_test_app_with_pool(pool.clone());
    pool.close().await;

    let response = get(&app, "/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await,
        json!({"status": "degraded", "database": "unavailable"})
    );
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_json_405() {
    let app = build_test_app().await;
    for (method, uri) in [
        (Method::PUT, "/user"),
        (Method::POST, "/user/1"),
        (Method::DELETE, "/galaxy"),
        (Method::POST, "/health"),
        (Method::DELETE, "/"),
    ] {
        let response = send_method(&app, method.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(body_json(response).await, json!({"msg": "Method not allowed"}));
    }
}
