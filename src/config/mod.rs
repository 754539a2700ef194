//! Server and database configuration loaded from environment variables.

mod backend;

pub use backend::Backend;

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                    | Default                          |
    /// |----------------------------|----------------------------------|
    /// | `DATABASE_URL`             | `sqlite:///tmp/test.db?mode=rwc` |
    /// | `HOST`                     | `0.0.0.0`                        |
    /// | `PORT`                     | `3000`                           |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or("PORT", lookup("PORT"), 3000u16)?;
        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", lookup("DATABASE_MAX_CONNECTIONS"), 5u32)?;
        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    pub fn backend(&self) -> Result<Backend, ConfigError> {
        Backend::from_url(&self.database_url)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: s }),
    }
}
