//! Extract a non-empty JSON object body.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::error::AppError;
use crate::models::Body;

/// Request body parsed as a JSON object with at least one key.
///
/// An absent body, invalid JSON, a non-object value, or `{}` all reject with
/// [`AppError::InvalidInput`]. The `Content-Type` header is not inspected.
#[derive(Debug, Clone)]
pub struct JsonObject(pub Body);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::InvalidInput)?;
        parse_object(&bytes).map(JsonObject)
    }
}

fn parse_object(bytes: &[u8]) -> Result<Body, AppError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(map),
        _ => Err(AppError::InvalidInput),
    }
}
