//! Server binary: loads config, prepares the store, serves the API.

use axum::{extract::Request, ServiceExt};
use galaxy_api::{app, connect_or_create, ensure_schema, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("galaxy_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let backend = config.backend()?;
    tracing::info!(?backend, port = config.port, "loaded configuration");

    let pool = connect_or_create(&config.database_url, config.max_connections, backend).await?;
    ensure_schema(&pool, backend).await?;

    let app = app(AppState::new(pool));
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
