//! Handlers for the `/locations` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_core::validation::{
    validate_coordinates, validate_optional_text, validate_postal_code, validate_required_text,
    MAX_ADDRESS_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_POSTAL_CODE_LEN, MAX_REGION_LEN,
};
use marquee_core::{geo, pagination};
use marquee_db::models::location::{CreateLocation, Location, UpdateLocation};
use marquee_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::cached_list;
use crate::query::{IncludeDeletedParams, NearbyParams, PaginationParams, SearchParams};
use crate::state::AppState;

/// Cache key prefix for location listings.
const CACHE_PREFIX: &str = "locations:";

fn validate_create(input: &CreateLocation) -> Result<(), CoreError> {
    validate_required_text("name", &input.name, MAX_NAME_LEN)?;
    validate_required_text("city", &input.city, MAX_REGION_LEN)?;
    validate_optional_text("state", input.state.as_deref(), MAX_REGION_LEN)?;
    validate_required_text("country", &input.country, MAX_REGION_LEN)?;
    validate_coordinates(input.latitude, input.longitude)?;
    validate_optional_text("postal_code", input.postal_code.as_deref(), MAX_POSTAL_CODE_LEN)?;
    validate_postal_code(input.postal_code.as_deref())?;
    validate_optional_text("address", input.address.as_deref(), MAX_ADDRESS_LEN)?;
    validate_optional_text("description", input.description.as_deref(), MAX_DESCRIPTION_LEN)?;
    Ok(())
}

fn validate_update(input: &UpdateLocation) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_required_text("name", name, MAX_NAME_LEN)?;
    }
    if let Some(city) = &input.city {
        validate_required_text("city", city, MAX_REGION_LEN)?;
    }
    validate_optional_text("state", input.state.as_deref(), MAX_REGION_LEN)?;
    if let Some(country) = &input.country {
        validate_required_text("country", country, MAX_REGION_LEN)?;
    }
    validate_coordinates(input.latitude, input.longitude)?;
    validate_optional_text("postal_code", input.postal_code.as_deref(), MAX_POSTAL_CODE_LEN)?;
    validate_postal_code(input.postal_code.as_deref())?;
    validate_optional_text("address", input.address.as_deref(), MAX_ADDRESS_LEN)?;
    validate_optional_text("description", input.description.as_deref(), MAX_DESCRIPTION_LEN)?;
    Ok(())
}

/// POST /api/v1/locations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    validate_create(&input)?;

    let location = LocationRepo::create(&state.pool, &input).await?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id = location.id, name = %location.name, "Location created");
    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /api/v1/locations
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Location>>> {
    let limit = pagination::clamp_limit(
        params.limit,
        state.config.default_page_limit,
        state.config.max_page_limit,
    );
    let offset = pagination::clamp_offset(params.offset);

    let locations = LocationRepo::list(&state.pool, limit, offset).await?;
    tracing::debug!(count = locations.len(), "Listed locations");
    Ok(Json(locations))
}

/// GET /api/v1/locations/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    cached_list(&state, "locations:active", || {
        LocationRepo::list_active(&state.pool)
    })
    .await
}

/// GET /api/v1/locations/nearby?latitude=&longitude=&radius=
///
/// Both coordinates are required; an out-of-range center is a validation
/// failure, never a silently-empty result. A missing or non-positive
/// radius falls back to the configured default.
pub async fn nearby(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> AppResult<Json<Vec<Location>>> {
    let (Some(latitude), Some(longitude)) = (params.latitude, params.longitude) else {
        return Err(AppError::BadRequest(
            "latitude and longitude query parameters are required".to_string(),
        ));
    };
    let center = geo::validate_center(latitude, longitude)?;
    let radius_km = geo::resolve_radius(params.radius, state.config.default_radius_km);

    let candidates = LocationRepo::list_with_coordinates(&state.pool).await?;
    let hits = geo::filter_within_radius(center, radius_km, candidates, |l| {
        match (l.latitude, l.longitude) {
            (Some(lat), Some(lon)) => Some(geo::Coordinates::new(lat, lon)),
            _ => None,
        }
    });
    tracing::debug!(count = hits.len(), radius_km, "Nearby locations");
    Ok(Json(hits))
}

/// GET /api/v1/locations/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Location>>> {
    let Some(term) = params.q else {
        return Err(AppError::BadRequest(
            "q query parameter is required".to_string(),
        ));
    };
    // Empty query short-circuits without touching storage.
    if term.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let locations = LocationRepo::search(&state.pool, &term).await?;
    Ok(Json(locations))
}

/// GET /api/v1/locations/{id}?include_deleted=
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<Location>> {
    let location = if params.include_deleted {
        LocationRepo::find_by_id_include_deleted(&state.pool, id).await?
    } else {
        LocationRepo::find_by_id(&state.pool, id).await?
    };

    let location = location.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Location",
        id,
    }))?;
    Ok(Json(location))
}

/// PATCH /api/v1/locations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    validate_update(&input)?;

    let location = LocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id, "Location updated");
    Ok(Json(location))
}

/// DELETE /api/v1/locations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LocationRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        state.cache.invalidate_prefix(CACHE_PREFIX).await;
        tracing::info!(id, "Location deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))
    }
}
