//! Repository for the `theatre_types` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::theatre_type::{CreateTheatreType, TheatreType, UpdateTheatreType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, is_active, deleted_at, created_at, updated_at";

/// Provides CRUD and query operations for theatre types.
///
/// Name uniqueness among live rows is ultimately enforced by the partial
/// unique index `uq_theatre_types_name`; [`TheatreTypeRepo::find_by_name`]
/// backs the pre-flight check that produces friendlier conflict errors.
pub struct TheatreTypeRepo;

impl TheatreTypeRepo {
    /// Insert a new theatre type, returning the created row.
    ///
    /// If `is_active` is `None`, defaults to `true`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTheatreType,
    ) -> Result<TheatreType, sqlx::Error> {
        let query = format!(
            "INSERT INTO theatre_types (name, description, is_active)
             VALUES ($1, $2, COALESCE($3, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TheatreType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a theatre type by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TheatreType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM theatre_types WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, TheatreType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a theatre type by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TheatreType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theatre_types WHERE id = $1");
        sqlx::query_as::<_, TheatreType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a theatre type by exact name match. Excludes soft-deleted rows.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<TheatreType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM theatre_types WHERE name = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, TheatreType>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List theatre types ordered by most recently created first.
    /// Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TheatreType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM theatre_types
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, TheatreType>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List active theatre types. Excludes soft-deleted rows.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<TheatreType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM theatre_types
             WHERE is_active AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, TheatreType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a theatre type. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTheatreType,
    ) -> Result<Option<TheatreType>, sqlx::Error> {
        let query = format!(
            "UPDATE theatre_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TheatreType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a theatre type by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE theatre_types SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
