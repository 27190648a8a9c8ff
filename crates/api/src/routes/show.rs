//! Route definitions for shows.

use axum::routing::get;
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// GET    /active               -> list_active
/// GET    /featured             -> list_featured
/// GET    /current              -> list_current
/// GET    /upcoming             -> list_upcoming
/// GET    /search               -> search
/// GET    /theatre/{theatre_id} -> list_by_theatre
/// GET    /type/{show_type_id}  -> list_by_show_type
/// GET    /{id}                 -> get_by_id
/// PATCH  /{id}                 -> update
/// DELETE /{id}                 -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show::list).post(show::create))
        .route("/active", get(show::list_active))
        .route("/featured", get(show::list_featured))
        .route("/current", get(show::list_current))
        .route("/upcoming", get(show::list_upcoming))
        .route("/search", get(show::search))
        .route("/theatre/{theatre_id}", get(show::list_by_theatre))
        .route("/type/{show_type_id}", get(show::list_by_show_type))
        .route(
            "/{id}",
            get(show::get_by_id).patch(show::update).delete(show::delete),
        )
}
