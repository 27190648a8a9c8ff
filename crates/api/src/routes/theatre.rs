//! Route definitions for theatres.

use axum::routing::get;
use axum::Router;

use crate::handlers::theatre;
use crate::state::AppState;

/// Routes mounted at `/theatres`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /active                 -> list_active
/// GET    /featured               -> list_featured
/// GET    /nearby                 -> nearby
/// GET    /search                 -> search
/// GET    /location/{location_id} -> list_by_location
/// GET    /type/{theatre_type_id} -> list_by_theatre_type
/// GET    /{id}                   -> get_by_id
/// PATCH  /{id}                   -> update
/// DELETE /{id}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(theatre::list).post(theatre::create))
        .route("/active", get(theatre::list_active))
        .route("/featured", get(theatre::list_featured))
        .route("/nearby", get(theatre::nearby))
        .route("/search", get(theatre::search))
        .route("/location/{location_id}", get(theatre::list_by_location))
        .route("/type/{theatre_type_id}", get(theatre::list_by_theatre_type))
        .route(
            "/{id}",
            get(theatre::get_by_id)
                .patch(theatre::update)
                .delete(theatre::delete),
        )
}
