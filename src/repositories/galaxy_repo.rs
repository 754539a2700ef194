//! Repository for the `galaxies` table.

use async_trait::async_trait;
use sqlx::AnyPool;

use super::{delete_by_id, Repository};
use crate::models::{DbId, Galaxy, NewGalaxy};

const COLUMNS: &str = "id, name, description";

pub struct GalaxyRepo;

#[async_trait]
impl Repository for GalaxyRepo {
    type Entity = Galaxy;
    type Input = NewGalaxy;

    const LABEL: &'static str = "Galaxy";

    async fn list(pool: &AnyPool) -> Result<Vec<Galaxy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galaxies ORDER BY id");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, Galaxy>(&query).fetch_all(pool).await
    }

    async fn create(pool: &AnyPool, input: &NewGalaxy) -> Result<Galaxy, sqlx::Error> {
        let query = format!("INSERT INTO galaxies (name, description) VALUES ($1, $2) RETURNING {COLUMNS}");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, Galaxy>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    async fn delete(pool: &AnyPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_by_id(pool, "galaxies", id).await
    }
}
