//! Repository for the `planets` table.

use async_trait::async_trait;
use sqlx::AnyPool;

use super::{delete_by_id, Repository};
use crate::models::{DbId, NewPlanet, Planet};

const COLUMNS: &str = "id, name, description, galaxy_id";

pub struct PlanetRepo;

#[async_trait]
impl Repository for PlanetRepo {
    type Entity = Planet;
    type Input = NewPlanet;

    const LABEL: &'static str = "Planet";

    async fn list(pool: &AnyPool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    async fn create(pool: &AnyPool, input: &NewPlanet) -> Result<Planet, sqlx::Error> {
        let query = format!("INSERT INTO planets (name, description, galaxy_id) VALUES ($1, $2, $3) RETURNING {COLUMNS}");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.galaxy_id)
            .fetch_one(pool)
            .await
    }

    async fn delete(pool: &AnyPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_by_id(pool, "planets", id).await
    }
}
