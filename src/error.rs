//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::message;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
    #[error("unsupported DATABASE_URL scheme: {0}")]
    UnsupportedBackend(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid field: {0}")]
    InvalidField(&'static str),
    /// Carries the entity label, e.g. `User`.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Not found")]
    RouteNotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput | AppError::MissingField(_) | AppError::InvalidField(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match &self {
            AppError::Db(e) => {
                tracing::error!(error = %e, "database failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        message(status, msg).into_response()
    }
}
