//! Repository for the `users` table.

use async_trait::async_trait;
use sqlx::AnyPool;

use super::{delete_by_id, Repository};
use crate::models::{DbId, NewUser, User};

const COLUMNS: &str = "id, username, email";

pub struct UserRepo;

#[async_trait]
impl Repository for UserRepo {
    type Entity = User;
    type Input = NewUser;

    const LABEL: &'static str = "User";

    async fn list(pool: &AnyPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    async fn create(pool: &AnyPool, input: &NewUser) -> Result<User, sqlx::Error> {
        let query = format!("INSERT INTO users (username, email) VALUES ($1, $2) RETURNING {COLUMNS}");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    async fn delete(pool: &AnyPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete_by_id(pool, "users", id).await
    }
}
