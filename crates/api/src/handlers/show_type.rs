//! Handlers for the `/show-types` resource.
//!
//! Same shape as the theatre type handlers: name-unique category rows with
//! a `find_by_name` pre-flight backed by the `uq_show_types_name` index.

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
use marquee_db::models::show_type::{CreateShowType, ShowType, UpdateShowType};
use marquee_db::repositories::ShowTypeRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::cached_list;
use crate::query::{IncludeDeletedParams, PaginationParams};
use crate::state::AppState;

/// Cache key prefix for show type listings.
const CACHE_PREFIX: &str = "show_types:";

/// Fail with a conflict if `name` is already taken by a live row other
/// than `exclude_id`. Passing the record's own ID permits no-op renames.
async fn check_unique_name(
    pool: &sqlx::PgPool,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(existing) = ShowTypeRepo::find_by_name(pool, name).await? {
        if Some(existing.id) != exclude_id {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Show type '{name}' already exists"
            ))));
        }
    }
    Ok(())
}

/// POST /api/v1/show-types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShowType>,
) -> AppResult<(StatusCode, Json<ShowType>)> {
    validate_required_text("name", &input.name, MAX_TYPE_NAME_LEN)?;
    validate_optional_text("description", input.description.as_deref(), MAX_DESCRIPTION_LEN)?;
    check_unique_name(&state.pool, &input.name, None).await?;

    let show_type = ShowTypeRepo::create(&state.pool, &input).await?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id = show_type.id, name = %show_type.name, "Show type created");
    Ok((StatusCode::CREATED, Json(show_type)))
}

/// GET /api/v1/show-types
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<ShowType>>> {
    let limit = pagination::clamp_limit(
        params.limit,
        state.config.default_page_limit,
        state.config.max_page_limit,
    );
    let offset = pagination::clamp_offset(params.offset);

    let show_types = ShowTypeRepo::list(&state.pool, limit, offset).await?;
    tracing::debug!(count = show_types.len(), "Listed show types");
    Ok(Json(show_types))
}

/// GET /api/v1/show-types/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    cached_list(&state, "show_types:active", || {
        ShowTypeRepo::list_active(&state.pool)
    })
    .await
}

/// GET /api/v1/show-types/name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<ShowType>> {
    let show_type = ShowTypeRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Show type '{name}' not found")))?;
    Ok(Json(show_type))
}

/// GET /api/v1/show-types/{id}?include_deleted=
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<ShowType>> {
    let show_type = if params.include_deleted {
        ShowTypeRepo::find_by_id_include_deleted(&state.pool, id).await?
    } else {
        ShowTypeRepo::find_by_id(&state.pool, id).await?
    };

    let show_type = show_type.ok_or(AppError::Core(CoreError::NotFound {
        entity: "ShowType",
        id,
    }))?;
    Ok(Json(show_type))
}

/// PATCH /api/v1/show-types/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShowType>,
) -> AppResult<Json<ShowType>> {
    if let Some(name) = &input.name {
        validate_required_text("name", name, MAX_TYPE_NAME_LEN)?;
        check_unique_name(&state.pool, name, Some(id)).await?;
    }
    validate_optional_text("description", input.description.as_deref(), MAX_DESCRIPTION_LEN)?;

    let show_type = ShowTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShowType",
            id,
        }))?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id, "Show type updated");
    Ok(Json(show_type))
}

/// DELETE /api/v1/show-types/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ShowTypeRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        state.cache.invalidate_prefix(CACHE_PREFIX).await;
        tracing::info!(id, "Show type deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ShowType",
            id,
        }))
    }
}
