//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use galaxy_api::AppError;
use serde_json::{json, Value};

async fn error_to_response(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn invalid_input_is_400_with_fixed_message() {
    let (status, json) = error_to_response(AppError::InvalidInput).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"msg": "Invalid input"}));
}

#[tokio::test]
async fn not_found_is_404_with_entity_message() {
    let (status, json) = error_to_response(AppError::NotFound("Galaxy")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"msg": "Galaxy not found"}));
}

#[tokio::test]
async fn database_error_is_500_without_details() {
    let (status, json) = error_to_response(AppError::Db(sqlx::Error::PoolClosed)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"msg": "Internal server error"}));
}

#[tokio::test]
async fn method_not_allowed_is_405_json() {
    let (status, json) = error_to_response(AppError::MethodNotAllowed).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json, json!({"msg": "Method not allowed"}));
}
