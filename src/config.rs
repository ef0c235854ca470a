//! Application configuration management.
//!
//! Configuration is read from environment variables (optionally seeded from a
//! `.env` file) and deserialized into a typed struct with `envy`.

use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8080
/// - `DB_MAX_CONNECTIONS` (optional): pool size, defaults to 5
/// - `DB_QUERY_TIMEOUT_MS` (optional): per-query deadline, unset means none
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,

    #[serde(default)]
    pub db_query_timeout_ms: Option<u64>,
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if one exists; variables already set in
    /// the process environment take precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a value cannot be
    /// parsed into its field type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
    }

    /// The per-query deadline, if one is configured.
    pub fn query_timeout(&self) -> Option<Duration> {
        self.db_query_timeout_ms.map(Duration::from_millis)
    }
}
