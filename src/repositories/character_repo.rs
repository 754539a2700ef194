//! Repository for the `characters` table.

use async_trait::async_trait;
use sqlx::AnyPool;

use super::{delete_by_id, Repository};
use crate::models::{Character, DbId, NewCharacter};

const COLUMNS: &str = "id, name, description, planet_id";

pub struct CharacterRepo;

#[async_trait]
impl Repository for CharacterRepo {
    type Entity = Character;
    type Input = NewCharacter;

    const LABEL: &'static str = "Character";

    async fn list(pool: &AnyPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    async fn create(pool: &AnyPool, input: &NewCharacter) -> Result<Character, sqlx::Error> {
        let query = format!("INSERT INTO characters (name, description, planet_id) VALUES ($1, $2, $3) RETURNING {COLUMNS}");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.planet_id)
            .fetch_one(pool)
            .await
    }

    async fn delete(pool: &AnyPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_by_id(pool, "characters", id).await
    }
}
