//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every default query
//! filters soft-deleted rows; `find_by_id_include_deleted` is the only
//! escape hatch.

pub mod location_repo;
pub mod show_repo;
pub mod show_type_repo;
pub mod theatre_repo;
pub mod theatre_type_repo;

pub use location_repo::LocationRepo;
pub use show_repo::ShowRepo;
pub use show_type_repo::ShowTypeRepo;
pub use theatre_repo::TheatreRepo;
pub use theatre_type_repo::TheatreTypeRepo;
