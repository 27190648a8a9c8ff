//! Handlers for the `/theatres` resource.
//!
//! Theatres reference a location and a theatre type; both must resolve to
//! live rows at write time, and each missing reference fails with its own
//! entity-specific not-found.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_core::validation::{
    validate_capacity, validate_email, validate_optional_text, validate_phone,
    validate_required_text, validate_url, MAX_ADDRESS_LEN, MAX_LONG_DESCRIPTION_LEN, MAX_NAME_LEN,
};
use marquee_core::{geo, pagination};
use marquee_db::models::theatre::{
    CreateTheatre, Theatre, TheatreWithCoordinates, UpdateTheatre,
};
use marquee_db::repositories::{LocationRepo, TheatreRepo, TheatreTypeRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::cached_list;
use crate::query::{IncludeDeletedParams, NearbyParams, PaginationParams, SearchParams};
use crate::state::AppState;

/// Cache key prefix for theatre listings.
const CACHE_PREFIX: &str = "theatres:";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify the referenced location exists and is not deleted.
async fn ensure_location_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    LocationRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))
}

/// Verify the referenced theatre type exists and is not deleted.
async fn ensure_theatre_type_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    TheatreTypeRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TheatreType",
            id,
        }))
}

fn validate_fields(
    name: Option<&str>,
    description: Option<&str>,
    capacity: Option<i32>,
    address: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
    website: Option<&str>,
    image_url: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(name) = name {
        validate_required_text("name", name, MAX_NAME_LEN)?;
    }
    validate_optional_text("description", description, MAX_LONG_DESCRIPTION_LEN)?;
    validate_capacity(capacity)?;
    validate_optional_text("address", address, MAX_ADDRESS_LEN)?;
    validate_phone(phone)?;
    validate_email(email)?;
    validate_url("website", website)?;
    validate_url("image_url", image_url)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/theatres
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTheatre>,
) -> AppResult<(StatusCode, Json<Theatre>)> {
    validate_fields(
        Some(&input.name),
        input.description.as_deref(),
        input.capacity,
        input.address.as_deref(),
        input.phone.as_deref(),
        input.email.as_deref(),
        input.website.as_deref(),
        input.image_url.as_deref(),
    )?;
    ensure_location_exists(&state.pool, input.location_id).await?;
    ensure_theatre_type_exists(&state.pool, input.theatre_type_id).await?;

    let theatre = TheatreRepo::create(&state.pool, &input).await?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id = theatre.id, name = %theatre.name, "Theatre created");
    Ok((StatusCode::CREATED, Json(theatre)))
}

/// GET /api/v1/theatres
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Theatre>>> {
    let limit = pagination::clamp_limit(
        params.limit,
        state.config.default_page_limit,
        state.config.max_page_limit,
    );
    let offset = pagination::clamp_offset(params.offset);

    let theatres = TheatreRepo::list(&state.pool, limit, offset).await?;
    tracing::debug!(count = theatres.len(), "Listed theatres");
    Ok(Json(theatres))
}

/// GET /api/v1/theatres/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    cached_list(&state, "theatres:active", || {
        TheatreRepo::list_active(&state.pool)
    })
    .await
}

/// GET /api/v1/theatres/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    cached_list(&state, "theatres:featured", || {
        TheatreRepo::list_featured(&state.pool)
    })
    .await
}

/// GET /api/v1/theatres/nearby?latitude=&longitude=&radius=
///
/// A theatre's coordinates are inherited from its location; theatres whose
/// location is deleted or coordinate-less are never candidates.
pub async fn nearby(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> AppResult<Json<Vec<TheatreWithCoordinates>>> {
    let (Some(latitude), Some(longitude)) = (params.latitude, params.longitude) else {
        return Err(AppError::BadRequest(
            "latitude and longitude query parameters are required".to_string(),
        ));
    };
    let center = geo::validate_center(latitude, longitude)?;
    let radius_km = geo::resolve_radius(params.radius, state.config.default_radius_km);

    let candidates = TheatreRepo::list_with_coordinates(&state.pool).await?;
    let hits = geo::filter_within_radius(center, radius_km, candidates, |t| t.coordinates());
    tracing::debug!(count = hits.len(), radius_km, "Nearby theatres");
    Ok(Json(hits))
}

/// GET /api/v1/theatres/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Theatre>>> {
    let Some(term) = params.q else {
        return Err(AppError::BadRequest(
            "q query parameter is required".to_string(),
        ));
    };
    if term.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let theatres = TheatreRepo::search(&state.pool, &term).await?;
    Ok(Json(theatres))
}

/// GET /api/v1/theatres/location/{location_id}
pub async fn list_by_location(
    State(state): State<AppState>,
    Path(location_id): Path<DbId>,
) -> AppResult<Json<Vec<Theatre>>> {
    let theatres = TheatreRepo::list_by_location(&state.pool, location_id).await?;
    Ok(Json(theatres))
}

/// GET /api/v1/theatres/type/{theatre_type_id}
pub async fn list_by_theatre_type(
    State(state): State<AppState>,
    Path(theatre_type_id): Path<DbId>,
) -> AppResult<Json<Vec<Theatre>>> {
    let theatres = TheatreRepo::list_by_theatre_type(&state.pool, theatre_type_id).await?;
    Ok(Json(theatres))
}

/// GET /api/v1/theatres/{id}?include_deleted=
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<Theatre>> {
    let theatre = if params.include_deleted {
        TheatreRepo::find_by_id_include_deleted(&state.pool, id).await?
    } else {
        TheatreRepo::find_by_id(&state.pool, id).await?
    };

    let theatre = theatre.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Theatre",
        id,
    }))?;
    Ok(Json(theatre))
}

/// PATCH /api/v1/theatres/{id}
///
/// Reference checks run only for the FK fields actually supplied.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTheatre>,
) -> AppResult<Json<Theatre>> {
    validate_fields(
        input.name.as_deref(),
        input.description.as_deref(),
        input.capacity,
        input.address.as_deref(),
        input.phone.as_deref(),
        input.email.as_deref(),
        input.website.as_deref(),
        input.image_url.as_deref(),
    )?;
    if let Some(location_id) = input.location_id {
        ensure_location_exists(&state.pool, location_id).await?;
    }
    if let Some(theatre_type_id) = input.theatre_type_id {
        ensure_theatre_type_exists(&state.pool, theatre_type_id).await?;
    }

    let theatre = TheatreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Theatre",
            id,
        }))?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id, "Theatre updated");
    Ok(Json(theatre))
}

/// DELETE /api/v1/theatres/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TheatreRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        state.cache.invalidate_prefix(CACHE_PREFIX).await;
        tracing::info!(id, "Theatre deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Theatre",
            id,
        }))
    }
}
