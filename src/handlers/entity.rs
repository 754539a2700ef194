//! Entity handlers: list, create, delete. Generic over the repository.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::{DbId, FromBody};
use crate::repositories::Repository;
use crate::response::message;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Path ids that are not integers never match a row.
fn parse_id<R: Repository>(raw: &str) -> Result<DbId, AppError> {
    raw.parse().map_err(|_| AppError::NotFound(R::LABEL))
}

pub async fn list<R: Repository>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = R::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn create<R: Repository>(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let input = R::Input::from_body(&body)?;
    let row = R::create(&state.pool, &input).await?;
    tracing::info!(entity = R::LABEL, "created");
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn delete<R: Repository>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id::<R>(&id_str)?;
    if !R::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(R::LABEL));
    }
    tracing::info!(entity = R::LABEL, id, "deleted");
    Ok(message(StatusCode::OK, format!("{} deleted", R::LABEL)))
}
