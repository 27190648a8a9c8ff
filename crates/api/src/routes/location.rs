//! Route definitions for locations.

use axum::routing::get;
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// Routes mounted at `/locations`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /active      -> list_active
/// GET    /nearby      -> nearby
/// GET    /search      -> search
/// GET    /{id}        -> get_by_id
/// PATCH  /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(location::list).post(location::create))
        .route("/active", get(location::list_active))
        .route("/nearby", get(location::nearby))
        .route("/search", get(location::search))
        .route(
            "/{id}",
            get(location::get_by_id)
                .patch(location::update)
                .delete(location::delete),
        )
}
