//! Galaxy entity model and DTO.

use serde::Serialize;
use sqlx::FromRow;

use super::{required_str, Body, DbId, FromBody};
use crate::error::AppError;

/// A row from the `galaxies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Galaxy {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// DTO for creating a galaxy. Deleting it later leaves its planets in place.
#[derive(Debug, Clone)]
pub struct NewGalaxy {
    pub name: String,
    pub description: String,
}

impl FromBody for NewGalaxy {
    fn from_body(body: &Body) -> Result<Self, AppError> {
        Ok(Self {
            name: required_str(body, "name")?,
            description: required_str(body, "description")?,
        })
    }
}
