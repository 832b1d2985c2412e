//! Server configuration
//!
//! Values come from built-in defaults overridden by environment variables
//! (`PORT`, `HOST`, `DATABASE_URL`, `DB_MAX_CONNECTIONS`, `LOG_FORMAT`).
//! A `.env` file in the working directory is loaded first if present.

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const MEMORY_DEFAULT_PORT: u16 = 5000;
pub const POSTGRES_DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl ServerConfig {
    /// Load configuration from `.env` and the process environment.
    pub fn load(default_port: u16) -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e).context("Failed to read .env file"),
        }

        Self::from_source(default_port, Environment::default().try_parsing(true))
    }

    fn from_source<S>(default_port: u16, source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", i64::from(default_port))?
            .set_default("db_max_connections", 10)?
            .set_default("log_format", "pretty")?
            .add_source(source)
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The database URL, required by the PostgreSQL service.
    pub fn require_database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .context("DATABASE_URL must be set")
    }
}
