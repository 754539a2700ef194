//! Route listing served at `/` and the catch-all fallbacks.

use crate::error::AppError;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub methods: Vec<&'static str>,
}

/// Routes registered on the router, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Sitemap(pub Arc<Vec<RouteInfo>>);

pub async fn sitemap(Extension(sitemap): Extension<Sitemap>) -> Json<Vec<RouteInfo>> {
    Json(sitemap.0.as_ref().clone())
}

pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Known path, unregistered method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
