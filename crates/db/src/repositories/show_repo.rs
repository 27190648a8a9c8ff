//! Repository for the `shows` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::{CreateShow, Show, UpdateShow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, theatre_id, show_type_id, title, description, director, \
    cast_members, duration, start_date, end_date, price, image_url, trailer_url, \
    is_featured, is_active, deleted_at, created_at, updated_at";

/// Provides CRUD and query operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// If `is_featured` is `None`, defaults to `false`.
    /// If `is_active` is `None`, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows
                (theatre_id, show_type_id, title, description, director, cast_members,
                 duration, start_date, end_date, price, image_url, trailer_url,
                 is_featured, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     COALESCE($13, false), COALESCE($14, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.theatre_id)
            .bind(input.show_type_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.director)
            .bind(&input.cast_members)
            .bind(input.duration)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.price)
            .bind(&input.image_url)
            .bind(&input.trailer_url)
            .bind(input.is_featured)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a show by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a show by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List shows ordered by most recently created first.
    /// Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List active shows. Excludes soft-deleted rows.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE is_active AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Show>(&query).fetch_all(pool).await
    }

    /// List featured shows. Excludes soft-deleted rows.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE is_featured AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Show>(&query).fetch_all(pool).await
    }

    /// List currently-running shows: active, started on or before today,
    /// and either open-ended or not yet ended. Excludes soft-deleted rows.
    pub async fn list_current(pool: &PgPool) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE is_active
               AND deleted_at IS NULL
               AND start_date <= CURRENT_DATE
               AND (end_date IS NULL OR end_date >= CURRENT_DATE)
             ORDER BY start_date DESC"
        );
        sqlx::query_as::<_, Show>(&query).fetch_all(pool).await
    }

    /// List upcoming shows: active with a start date after today.
    /// Excludes soft-deleted rows.
    pub async fn list_upcoming(pool: &PgPool) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE is_active
               AND deleted_at IS NULL
               AND start_date > CURRENT_DATE
             ORDER BY start_date ASC"
        );
        sqlx::query_as::<_, Show>(&query).fetch_all(pool).await
    }

    /// List shows playing at a given theatre. Excludes soft-deleted rows.
    pub async fn list_by_theatre(
        pool: &PgPool,
        theatre_id: DbId,
    ) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE theatre_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(theatre_id)
            .fetch_all(pool)
            .await
    }

    /// List shows of a given type. Excludes soft-deleted rows.
    pub async fn list_by_show_type(
        pool: &PgPool,
        show_type_id: DbId,
    ) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE show_type_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(show_type_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over title, description, director,
    /// and cast listing. Excludes soft-deleted rows.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Show>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shows
             WHERE (title ILIKE $1 OR description ILIKE $1
                    OR director ILIKE $1 OR cast_members ILIKE $1)
               AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await
    }

    /// Update a show. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShow,
    ) -> Result<Option<Show>, sqlx::Error> {
        let query = format!(
            "UPDATE shows SET
                theatre_id = COALESCE($2, theatre_id),
                show_type_id = COALESCE($3, show_type_id),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                director = COALESCE($6, director),
                cast_members = COALESCE($7, cast_members),
                duration = COALESCE($8, duration),
                start_date = COALESCE($9, start_date),
                end_date = COALESCE($10, end_date),
                price = COALESCE($11, price),
                image_url = COALESCE($12, image_url),
                trailer_url = COALESCE($13, trailer_url),
                is_featured = COALESCE($14, is_featured),
                is_active = COALESCE($15, is_active)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .bind(input.theatre_id)
            .bind(input.show_type_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.director)
            .bind(&input.cast_members)
            .bind(input.duration)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.price)
            .bind(&input.image_url)
            .bind(&input.trailer_url)
            .bind(input.is_featured)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a show by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE shows SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
