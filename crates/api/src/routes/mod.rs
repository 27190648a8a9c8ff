pub mod health;
pub mod location;
pub mod show;
pub mod show_type;
pub mod theatre;
pub mod theatre_type;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /locations                    create, paginated list
/// /locations/active             active list
/// /locations/nearby             proximity query
/// /locations/search             substring search
/// /locations/{id}               get, patch, soft delete
///
/// /theatre-types                create, paginated list
/// /theatre-types/active         active list
/// /theatre-types/name/{name}    exact-name fetch
/// /theatre-types/{id}           get, patch, soft delete
///
/// /show-types                   (same shape as theatre-types)
///
/// /theatres                     create, paginated list
/// /theatres/active              active list
/// /theatres/featured            featured list
/// /theatres/nearby              proximity query (via owning location)
/// /theatres/search              substring search
/// /theatres/location/{id}       theatres at a location
/// /theatres/type/{id}           theatres of a type
/// /theatres/{id}                get, patch, soft delete
///
/// /shows                        create, paginated list
/// /shows/active                 active list
/// /shows/featured               featured list
/// /shows/current                running today
/// /shows/upcoming               starting after today
/// /shows/search                 substring search
/// /shows/theatre/{id}           shows at a theatre
/// /shows/type/{id}              shows of a type
/// /shows/{id}                   get, patch, soft delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/locations", location::router())
        .nest("/theatre-types", theatre_type::router())
        .nest("/show-types", show_type::router())
        .nest("/theatres", theatre::router())
        .nest("/shows", show::router())
}
