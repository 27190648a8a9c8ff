//! Handlers for the `/theatre-types` resource.
//!
//! Names are unique among live rows. The `find_by_name` pre-flight check
//! produces a friendly conflict message; the partial unique index is the
//! authoritative guard, and its violation classifies to the same 409.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use marquee_core::error::CoreError;
use marquee_core::pagination;
use marquee_core::types::DbId;
use marquee_core::validation::{
    validate_optional_text, validate_required_text, MAX_DESCRIPTION_LEN, MAX_TYPE_NAME_LEN,
};
use marquee_db::models::theatre_type::{CreateTheatreType, TheatreType, UpdateTheatreType};
use marquee_db::repositories::TheatreTypeRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::cached_list;
use crate::query::{IncludeDeletedParams, PaginationParams};
use crate::state::AppState;

/// Cache key prefix for theatre type listings.
const CACHE_PREFIX: &str = "theatre_types:";

/// Fail with a conflict if `name` is already taken by a live row other
/// than `exclude_id`. Passing the record's own ID permits no-op renames.
async fn check_unique_name(
    pool: &sqlx::PgPool,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(existing) = TheatreTypeRepo::find_by_name(pool, name).await? {
        if Some(existing.id) != exclude_id {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Theatre type '{name}' already exists"
            ))));
        }
    }
    Ok(())
}

/// POST /api/v1/theatre-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTheatreType>,
) -> AppResult<(StatusCode, Json<TheatreType>)> {
    validate_required_text("name", &input.name, MAX_TYPE_NAME_LEN)?;
    validate_optional_text("description", input.description.as_deref(), MAX_DESCRIPTION_LEN)?;
    check_unique_name(&state.pool, &input.name, None).await?;

    let theatre_type = TheatreTypeRepo::create(&state.pool, &input).await?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id = theatre_type.id, name = %theatre_type.name, "Theatre type created");
    Ok((StatusCode::CREATED, Json(theatre_type)))
}

/// GET /api/v1/theatre-types
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<TheatreType>>> {
    let limit = pagination::clamp_limit(
        params.limit,
        state.config.default_page_limit,
        state.config.max_page_limit,
    );
    let offset = pagination::clamp_offset(params.offset);

    let theatre_types = TheatreTypeRepo::list(&state.pool, limit, offset).await?;
    tracing::debug!(count = theatre_types.len(), "Listed theatre types");
    Ok(Json(theatre_types))
}

/// GET /api/v1/theatre-types/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    cached_list(&state, "theatre_types:active", || {
        TheatreTypeRepo::list_active(&state.pool)
    })
    .await
}

/// GET /api/v1/theatre-types/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<TheatreType>> {
    let theatre_type = TheatreTypeRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Theatre type '{name}' not found")))?;
    Ok(Json(theatre_type))
}

/// GET /api/v1/theatre-types/{id}?include_deleted=
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<TheatreType>> {
    let theatre_type = if params.include_deleted {
        TheatreTypeRepo::find_by_id_include_deleted(&state.pool, id).await?
    } else {
        TheatreTypeRepo::find_by_id(&state.pool, id).await?
    };

    let theatre_type = theatre_type.ok_or(AppError::Core(CoreError::NotFound {
        entity: "TheatreType",
        id,
    }))?;
    Ok(Json(theatre_type))
}

/// PATCH /api/v1/theatre-types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTheatreType>,
) -> AppResult<Json<TheatreType>> {
    if let Some(name) = &input.name {
        validate_required_text("name", name, MAX_TYPE_NAME_LEN)?;
        check_unique_name(&state.pool, name, Some(id)).await?;
    }
    validate_optional_text("description", input.description.as_deref(), MAX_DESCRIPTION_LEN)?;

    let theatre_type = TheatreTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TheatreType",
            id,
        }))?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id, "Theatre type updated");
    Ok(Json(theatre_type))
}

/// DELETE /api/v1/theatre-types/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TheatreTypeRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        state.cache.invalidate_prefix(CACHE_PREFIX).await;
        tracing::info!(id, "Theatre type deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TheatreType",
            id,
        }))
    }
}
