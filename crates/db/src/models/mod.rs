//! Catalog entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod location;
pub mod show;
pub mod show_type;
pub mod theatre;
pub mod theatre_type;
