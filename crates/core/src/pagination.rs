//! Pagination defaults and clamping helpers.
//!
//! This module lives in `core` (zero internal deps) so the same clamping
//! rules apply to every paginated listing regardless of which layer drives
//! the query.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default number of results per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum number of results per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Default listing offset.
pub const DEFAULT_OFFSET: i64 = 0;

// ---------------------------------------------------------------------------
// Clamping
// ---------------------------------------------------------------------------

/// Resolve a user-provided limit against the configured bounds.
///
/// Any limit outside `(0, max]` (absent, zero, negative, or too large)
/// falls back to `default` rather than being clamped to the nearest bound,
/// so a nonsense limit and an absent limit page identically.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    match limit {
        Some(l) if l > 0 && l <= max => l,
        _ => default,
    }
}

/// Floor a user-provided offset at zero.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(DEFAULT_OFFSET).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
