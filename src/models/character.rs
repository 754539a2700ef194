//! Character entity model and DTO.

use serde::Serialize;
use sqlx::FromRow;

use super::{required_id, required_str, Body, DbId, FromBody};
use crate::error::AppError;

/// A row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub planet_id: DbId,
}

#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub description: String,
    pub planet_id: DbId,
}

impl FromBody for NewCharacter {
    fn from_body(body: &Body) -> Result<Self, AppError> {
        Ok(Self {
            name: required_str(body, "name")?,
            description: required_str(body, "description")?,
            planet_id: required_id(body, "planet_id")?,
        })
    }
}
