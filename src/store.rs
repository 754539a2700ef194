//! Connection pool setup and table DDL for both supported backends.

use crate::config::Backend;
use crate::error::AppError;
use sqlx::any::AnyPoolOptions;
use sqlx::postgres::PgConnectOptions;
use sqlx::AnyPool;
use sqlx::ConnectOptions;
use std::str::FromStr;

/// Open a pool over the driver matching the URL scheme.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the four entity tables if they do not exist.
/// Reference columns are plain integers: no foreign-key constraint, no cascade.
pub async fn ensure_schema(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    let id = backend.id_column();
    let ddl = [
        format!(
            "CREATE TABLE IF NOT EXISTS users ({id}, username TEXT NOT NULL, email TEXT NOT NULL)"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS galaxies ({id}, name TEXT NOT NULL, description TEXT NOT NULL)"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS planets ({id}, name TEXT NOT NULL, description TEXT NOT NULL, galaxy_id BIGINT NOT NULL)"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS characters ({id}, name TEXT NOT NULL, description TEXT NOT NULL, planet_id BIGINT NOT NULL)"
        ),
    ];
    for sql in &ddl {
        tracing::debug!(sql = %sql, "ddl");
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}

/// Open the pool. On PostgreSQL a failed first connect triggers one attempt
/// to create the target database, then a retry; the original connect error
/// is returned when creation is not possible.
pub async fn connect_or_create(database_url: &str, max_connections: u32, backend: Backend) -> Result<AnyPool, AppError> {
    let first = match connect(database_url, max_connections).await {
        Ok(pool) => return Ok(pool),
        Err(e) if backend == Backend::Postgres => e,
        Err(e) => return Err(e),
    };
    tracing::warn!(error = %first, "connect failed, trying to create the database");
    if let Err(e) = ensure_database_exists(database_url).await {
        tracing::warn!(error = %e, "could not create database");
        return Err(first);
    }
    connect(database_url, max_connections).await
}

/// Create the PostgreSQL database named in the URL when it is missing.
/// Connects to the `postgres` maintenance database to do so.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let Some(db_name) = database_to_create(&opts).map(str::to_string) else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = opts.database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Database named by the options, unless it is absent or the maintenance db.
fn database_to_create(opts: &PgConnectOptions) -> Option<&str> {
    opts.get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "postgres")
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
