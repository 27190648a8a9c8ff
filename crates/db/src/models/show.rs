//! Show (performance) entity model and DTOs.

use chrono::NaiveDate;
use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shows` table.
///
/// Run dates are independently nullable; `end_date >= start_date` is
/// enforced at write time only when both are present. The cast listing is
/// stored as `cast_members` (`CAST` is reserved in SQL).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub theatre_id: DbId,
    pub show_type_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub director: Option<String>,
    pub cast_members: Option<String>,
    pub duration: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub trailer_url: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new show.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub theatre_id: DbId,
    pub show_type_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub director: Option<String>,
    pub cast_members: Option<String>,
    pub duration: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub trailer_url: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_featured: Option<bool>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing show. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShow {
    pub theatre_id: Option<DbId>,
    pub show_type_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub director: Option<String>,
    pub cast_members: Option<String>,
    pub duration: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub trailer_url: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}
