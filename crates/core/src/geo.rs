//! Proximity search over catalog coordinates.
//!
//! Distances are computed in-process with the haversine formula; callers
//! fetch candidate rows and run them through [`filter_within_radius`].
//! Candidates without a complete coordinate pair never match.

use crate::error::CoreError;
use crate::validation::{validate_latitude, validate_longitude};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Search radius applied when the caller supplies none (or a non-positive
/// value). Kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Great-circle distance between two points in kilometres (haversine).
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Validate a search center, rejecting out-of-range coordinates.
///
/// A bad center is a validation failure, never an empty result.
pub fn validate_center(latitude: f64, longitude: f64) -> Result<Coordinates, CoreError> {
    validate_latitude(latitude)?;
    validate_longitude(longitude)?;
    Ok(Coordinates::new(latitude, longitude))
}

/// Resolve a caller-supplied radius, falling back to `default_km` when the
/// value is absent, zero, or negative.
pub fn resolve_radius(radius_km: Option<f64>, default_km: f64) -> f64 {
    match radius_km {
        Some(r) if r > 0.0 => r,
        _ => default_km,
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep the items within `radius_km` of `center`, ordered nearest first.
///
/// `coords_of` extracts an item's coordinates; items yielding `None`
/// (either coordinate missing) are excluded unconditionally.
pub fn filter_within_radius<T, F>(
    center: Coordinates,
    radius_km: f64,
    items: Vec<T>,
    coords_of: F,
) -> Vec<T>
where
    F: Fn(&T) -> Option<Coordinates>,
{
    let mut hits: Vec<(f64, T)> = items
        .into_iter()
        .filter_map(|item| {
            let coords = coords_of(&item)?;
            let distance = haversine_km(center, coords);
            (distance <= radius_km).then_some((distance, item))
        })
        .collect();

    hits.sort_by(|a, b| a.0.total_cmp(&b.0));
    hits.into_iter().map(|(_, item)| item).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
