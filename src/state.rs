//! Shared application state for all routes.

use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}

impl AppState {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}
