//! Domain logic for the marquee venue catalog.
//!
//! Pure, database-free building blocks shared by the repository and API
//! layers: the error taxonomy, ID/timestamp aliases, field and range
//! validation, pagination clamping, and the haversine proximity engine.

pub mod error;
pub mod geo;
pub mod pagination;
pub mod types;
pub mod validation;
