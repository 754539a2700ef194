//! Galaxy API: REST backend for users, galaxies, planets and characters.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Backend, Config};
pub use error::{AppError, ConfigError};
pub use repositories::Repository;
pub use routes::{app, route_table, RouteTable};
pub use state::AppState;
pub use store::{connect, connect_or_create, ensure_database_exists, ensure_schema};
