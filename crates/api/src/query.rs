//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Used by every paginated listing. Values are clamped with
/// `marquee_core::pagination` against the configured bounds; out-of-range
/// input is never an error.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Free-text search parameters (`?q=`).
///
/// An absent `q` is rejected as a bad request; an empty `q` short-circuits
/// to an empty result set without a storage call.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Proximity query parameters (`?latitude=&longitude=&radius=`).
///
/// Both coordinates are required; the radius is optional and falls back to
/// the configured default when absent or non-positive.
#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<f64>,
}

/// Escape-hatch flag for by-ID fetches that need to resolve historical
/// (soft-deleted) records.
#[derive(Debug, Deserialize)]
pub struct IncludeDeletedParams {
    #[serde(default)]
    pub include_deleted: bool,
}
