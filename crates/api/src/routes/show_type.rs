//! Route definitions for show types.

use axum::routing::get;
use axum::Router;

use crate::handlers::show_type;
use crate::state::AppState;

/// Routes mounted at `/show-types`.
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
        .route("/", get(show_type::list).post(show_type::create))
        .route("/active", get(show_type::list_active))
        .route("/name/{name}", get(show_type::get_by_name))
        .route(
            "/{id}",
            get(show_type::get_by_id)
                .patch(show_type::update)
                .delete(show_type::delete),
        )
}
