//! Planet entity model and DTO.

use serde::Serialize;
use sqlx::FromRow;

use super::{required_id, required_str, Body, DbId, FromBody};
use crate::error::AppError;

/// A row from the `planets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub galaxy_id: DbId,
}

/// DTO for creating a planet. `galaxy_id` is stored as given; the galaxy need not exist.
#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub description: String,
    pub galaxy_id: DbId,
}

impl FromBody for NewPlanet {
    fn from_body(body: &Body) -> Result<Self, AppError> {
        Ok(Self {
            name: required_str(body, "name")?,
            description: required_str(body, "description")?,
            galaxy_id: required_id(body, "galaxy_id")?,
        })
    }
}
