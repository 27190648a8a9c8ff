//! Show type (performance category) entity model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `show_types` table.
///
/// Names are unique among non-deleted rows, enforced by a partial unique
/// index (`uq_show_types_name`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new show type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShowType {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing show type. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShowType {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
