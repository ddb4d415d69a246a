//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection string for the SQLite database
    pub database_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    /// Insert the example customers into an empty database at startup
    pub seed_data: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - SQLite connection string (default: `sqlite://customers.db`)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `MAX_CONNECTIONS` - Database pool size (default: 5)
    /// - `SEED_DATA` - `true`/`1` to seed example customers (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            max_connections: env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
            seed_data: env::var("SEED_DATA")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_data),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://customers.db".to_string(),
            server_port: 8080,
            max_connections: 5,
            seed_data: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
