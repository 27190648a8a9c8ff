use std::fmt::Display;
use std::str::FromStr;

use marquee_core::geo::DEFAULT_RADIUS_KM;
use marquee_core::pagination::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Response cache entry TTL in seconds (default: `300`).
    pub cache_ttl_secs: u64,
    /// Interval between cache sweeper runs in seconds (default: `600`).
    pub cache_sweep_interval_secs: u64,
    /// Radius applied to proximity queries that supply none, in
    /// kilometres (default: `50`).
    pub default_radius_km: f64,
    /// Page size applied when a listing's limit is absent or out of
    /// range (default: `20`).
    pub default_page_limit: i64,
    /// Largest accepted page size (default: `100`).
    pub max_page_limit: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `HOST`                       | `0.0.0.0`               |
    /// | `PORT`                       | `3000`                  |
    /// | `CORS_ORIGINS`               | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`      | `30`                    |
    /// | `CACHE_TTL_SECS`             | `300`                   |
    /// | `CACHE_SWEEP_INTERVAL_SECS`  | `600`                   |
    /// | `DEFAULT_SEARCH_RADIUS_KM`   | `50`                    |
    /// | `DEFAULT_PAGE_LIMIT`         | `20`                    |
    /// | `MAX_PAGE_LIMIT`             | `100`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port: env_or("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_or("SHUTDOWN_TIMEOUT_SECS", 30),
            cache_ttl_secs: env_or("CACHE_TTL_SECS", 300),
            cache_sweep_interval_secs: env_or("CACHE_SWEEP_INTERVAL_SECS", 600),
            default_radius_km: env_or("DEFAULT_SEARCH_RADIUS_KM", DEFAULT_RADIUS_KM),
            default_page_limit: env_or("DEFAULT_PAGE_LIMIT", DEFAULT_PAGE_LIMIT),
            max_page_limit: env_or("MAX_PAGE_LIMIT", MAX_PAGE_LIMIT),
        }
    }
}

/// Read an environment variable, falling back to `default` when absent.
/// Panics on a present-but-unparseable value; misconfiguration should fail
/// at startup, not at first use.
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} is invalid: {e}")),
        Err(_) => default,
    }
}
