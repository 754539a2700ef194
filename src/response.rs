//! Message body helper shared by errors and delete confirmations.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub msg: String,
}

pub fn message(status: StatusCode, msg: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (status, Json(MessageBody { msg: msg.into() }))
}
