//! Route definitions for theatre types.

use axum::routing::get;
use axum::Router;

use crate::handlers::theatre_type;
use crate::state::AppState;

/// Routes mounted at `/theatre-types`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /active       -> list_active
/// GET    /name/{name}  -> get_by_name
/// GET    /{id}         -> get_by_id
/// PATCH  /{id}         -> update
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(theatre_type::list).post(theatre_type::create))
        .route("/active", get(theatre_type::list_active))
        .route("/name/{name}", get(theatre_type::get_by_name))
        .route(
            "/{id}",
            get(theatre_type::get_by_id)
                .patch(theatre_type::update)
                .delete(theatre_type::delete),
        )
}
