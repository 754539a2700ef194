//! User entity model and DTO.

use serde::Serialize;
use sqlx::FromRow;

use super::{required_str, Body, DbId, FromBody};
use crate::error::AppError;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
}

/// DTO for creating a user. No uniqueness check is made on either field.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl FromBody for NewUser {
    fn from_body(body: &Body) -> Result<Self, AppError> {
        Ok(Self {
            username: required_str(body, "username")?,
            email: required_str(body, "email")?,
        })
    }
}
