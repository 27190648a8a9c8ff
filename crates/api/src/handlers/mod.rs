//! Request handlers, one module per catalog entity.
//!
//! Every handler follows the same shape: field/range validation, then
//! relationship and uniqueness checks, then the repository call. A failed
//! check returns before storage is touched.

use std::future::Future;

use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub mod location;
pub mod show;
pub mod show_type;
pub mod theatre;
pub mod theatre_type;

/// Serve an unpaginated status listing through the response cache.
///
/// On a miss, `fetch` runs against storage, the serialized result is cached
/// under `key`, and the same JSON is returned. Writes invalidate by entity
/// prefix, so a hit can never outlive the data it was derived from.
pub(crate) async fn cached_list<T, Fut>(
    state: &AppState,
    key: &str,
    fetch: impl FnOnce() -> Fut,
) -> AppResult<Json<serde_json::Value>>
where
    T: Serialize,
    Fut: Future<Output = Result<Vec<T>, sqlx::Error>>,
{
    if let Some(hit) = state.cache.get(key).await {
        tracing::debug!(key, "Cache hit");
        return Ok(Json(hit));
    }

    let items = fetch().await?;
    let value = serde_json::to_value(&items)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize listing: {e}")))?;
    state.cache.insert(key, value.clone()).await;
    Ok(Json(value))
}
