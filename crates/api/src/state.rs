use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: marquee_db::DbPool,
    /// Server configuration (pagination and radius defaults, timeouts).
    pub config: Arc<ServerConfig>,
    /// Expiring response cache for the unpaginated status listings.
    pub cache: Arc<ResponseCache>,
}
