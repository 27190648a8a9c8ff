//! Handlers for the `/shows` resource.
//!
//! Shows reference a theatre and a show type; both must resolve to live
//! rows at write time. The date-range invariant is checked over the merged
//! values on partial update so a one-sided patch cannot break it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use marquee_core::error::CoreError;
use marquee_core::pagination;
use marquee_core::types::DbId;
use marquee_core::validation::{
    validate_date_range, validate_duration, validate_optional_text, validate_price,
    validate_required_text, validate_url, MAX_CAST_LEN, MAX_LONG_DESCRIPTION_LEN, MAX_NAME_LEN,
};
use marquee_db::models::show::{CreateShow, Show, UpdateShow};
use marquee_db::repositories::{ShowRepo, ShowTypeRepo, TheatreRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::cached_list;
use crate::query::{IncludeDeletedParams, PaginationParams, SearchParams};
use crate::state::AppState;

/// Cache key prefix for show listings.
const CACHE_PREFIX: &str = "shows:";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify the referenced theatre exists and is not deleted.
async fn ensure_theatre_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    TheatreRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Theatre",
            id,
        }))
}

/// Verify the referenced show type exists and is not deleted.
async fn ensure_show_type_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    ShowTypeRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShowType",
            id,
        }))
}

fn validate_fields(
    title: Option<&str>,
    description: Option<&str>,
    director: Option<&str>,
    cast_members: Option<&str>,
    duration: Option<i32>,
    price: Option<f64>,
    image_url: Option<&str>,
    trailer_url: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(title) = title {
        validate_required_text("title", title, MAX_NAME_LEN)?;
    }
    validate_optional_text("description", description, MAX_LONG_DESCRIPTION_LEN)?;
    validate_optional_text("director", director, MAX_NAME_LEN)?;
    validate_optional_text("cast_members", cast_members, MAX_CAST_LEN)?;
    validate_duration(duration)?;
    validate_price(price)?;
    validate_url("image_url", image_url)?;
    validate_url("trailer_url", trailer_url)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/shows
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShow>,
) -> AppResult<(StatusCode, Json<Show>)> {
    validate_fields(
        Some(&input.title),
        input.description.as_deref(),
        input.director.as_deref(),
        input.cast_members.as_deref(),
        input.duration,
        input.price,
        input.image_url.as_deref(),
        input.trailer_url.as_deref(),
    )?;
    validate_date_range(input.start_date, input.end_date)?;
    ensure_theatre_exists(&state.pool, input.theatre_id).await?;
    ensure_show_type_exists(&state.pool, input.show_type_id).await?;

    let show = ShowRepo::create(&state.pool, &input).await?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id = show.id, title = %show.title, "Show created");
    Ok((StatusCode::CREATED, Json(show)))
}

/// GET /api/v1/shows
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Show>>> {
    let limit = pagination::clamp_limit(
        params.limit,
        state.config.default_page_limit,
        state.config.max_page_limit,
    );
    let offset = pagination::clamp_offset(params.offset);

    let shows = ShowRepo::list(&state.pool, limit, offset).await?;
    tracing::debug!(count = shows.len(), "Listed shows");
    Ok(Json(shows))
}

/// GET /api/v1/shows/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    cached_list(&state, "shows:active", || ShowRepo::list_active(&state.pool)).await
}

/// GET /api/v1/shows/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    cached_list(&state, "shows:featured", || {
        ShowRepo::list_featured(&state.pool)
    })
    .await
}

/// GET /api/v1/shows/current
pub async fn list_current(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    cached_list(&state, "shows:current", || {
        ShowRepo::list_current(&state.pool)
    })
    .await
}

/// GET /api/v1/shows/upcoming
pub async fn list_upcoming(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    cached_list(&state, "shows:upcoming", || {
        ShowRepo::list_upcoming(&state.pool)
    })
    .await
}

/// GET /api/v1/shows/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Show>>> {
    let Some(term) = params.q else {
        return Err(AppError::BadRequest(
            "q query parameter is required".to_string(),
        ));
    };
    if term.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let shows = ShowRepo::search(&state.pool, &term).await?;
    Ok(Json(shows))
}

/// GET /api/v1/shows/theatre/{theatre_id}
pub async fn list_by_theatre(
    State(state): State<AppState>,
    Path(theatre_id): Path<DbId>,
) -> AppResult<Json<Vec<Show>>> {
    let shows = ShowRepo::list_by_theatre(&state.pool, theatre_id).await?;
    Ok(Json(shows))
}

/// GET /api/v1/shows/type/{show_type_id}
pub async fn list_by_show_type(
    State(state): State<AppState>,
    Path(show_type_id): Path<DbId>,
) -> AppResult<Json<Vec<Show>>> {
    let shows = ShowRepo::list_by_show_type(&state.pool, show_type_id).await?;
    Ok(Json(shows))
}

/// GET /api/v1/shows/{id}?include_deleted=
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeDeletedParams>,
) -> AppResult<Json<Show>> {
    let show = if params.include_deleted {
        ShowRepo::find_by_id_include_deleted(&state.pool, id).await?
    } else {
        ShowRepo::find_by_id(&state.pool, id).await?
    };

    let show = show.ok_or(AppError::Core(CoreError::NotFound { entity: "Show", id }))?;
    Ok(Json(show))
}

/// PATCH /api/v1/shows/{id}
///
/// The date-range check runs over the supplied bounds merged with the
/// stored ones, and reference checks run only for the FK fields actually
/// supplied.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShow>,
) -> AppResult<Json<Show>> {
    validate_fields(
        input.title.as_deref(),
        input.description.as_deref(),
        input.director.as_deref(),
        input.cast_members.as_deref(),
        input.duration,
        input.price,
        input.image_url.as_deref(),
        input.trailer_url.as_deref(),
    )?;

    let stored = ShowRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Show", id }))?;
    validate_date_range(
        input.start_date.or(stored.start_date),
        input.end_date.or(stored.end_date),
    )?;

    if let Some(theatre_id) = input.theatre_id {
        ensure_theatre_exists(&state.pool, theatre_id).await?;
    }
    if let Some(show_type_id) = input.show_type_id {
        ensure_show_type_exists(&state.pool, show_type_id).await?;
    }

    let show = ShowRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Show", id }))?;
    state.cache.invalidate_prefix(CACHE_PREFIX).await;
    tracing::info!(id, "Show updated");
    Ok(Json(show))
}

/// DELETE /api/v1/shows/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ShowRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        state.cache.invalidate_prefix(CACHE_PREFIX).await;
        tracing::info!(id, "Show deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Show", id }))
    }
}
