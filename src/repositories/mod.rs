//! Explicit repository interface over the entity tables.
//!
//! Route logic only sees [`Repository`]; every implementation writes plain
//! SQL through the `Any` pool so the same code runs on SQLite and PostgreSQL.

mod character_repo;
mod galaxy_repo;
mod planet_repo;
mod user_repo;

pub use character_repo::CharacterRepo;
pub use galaxy_repo::GalaxyRepo;
pub use planet_repo::PlanetRepo;
pub use user_repo::UserRepo;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::AnyPool;

use crate::models::{DbId, FromBody};

#[async_trait]
pub trait Repository: Send + Sync + 'static {
    type Entity: Serialize + Send;
    type Input: FromBody + Send + Sync;

    /// Singular entity name used in response messages, e.g. `User`.
    const LABEL: &'static str;

    /// Every row in storage order.
    async fn list(pool: &AnyPool) -> Result<Vec<Self::Entity>, sqlx::Error>;

    /// Insert one row and return it with its assigned id.
    async fn create(pool: &AnyPool, input: &Self::Input) -> Result<Self::Entity, sqlx::Error>;

    /// Returns `false` when no row had the given id.
    async fn delete(pool: &AnyPool, id: DbId) -> Result<bool, sqlx::Error>;
}

pub(crate) async fn delete_by_id(pool: &AnyPool, table: &str, id: DbId) -> Result<bool, sqlx::Error> {
    let sql = format!("DELETE FROM {table} WHERE id = $1");
    tracing::debug!(sql = %sql, id, "query");
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
