//! Theatre (venue) entity model and DTOs.

use marquee_core::geo::Coordinates;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `theatres` table.
///
/// A theatre has no coordinates of its own; proximity queries inherit them
/// from the owning [`Location`](crate::models::location::Location).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theatre {
    pub id: DbId,
    pub location_id: DbId,
    pub theatre_type_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A theatre joined with its location's coordinates, for proximity scans.
///
/// Rows whose location is soft-deleted or coordinate-less are excluded by
/// the query that produces this shape.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TheatreWithCoordinates {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub theatre: Theatre,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl TheatreWithCoordinates {
    /// The inherited coordinate pair, if complete.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

/// DTO for creating a new theatre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTheatre {
    pub location_id: DbId,
    pub theatre_type_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_featured: Option<bool>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing theatre. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTheatre {
    pub location_id: Option<DbId>,
    pub theatre_type_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}
