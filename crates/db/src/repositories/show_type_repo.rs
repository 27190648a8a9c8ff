//! Repository for the `show_types` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::show_type::{CreateShowType, ShowType, UpdateShowType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, is_active, deleted_at, created_at, updated_at";

/// Provides CRUD and query operations for show types.
///
/// Name uniqueness among live rows is ultimately enforced by the partial
/// unique index `uq_show_types_name`; [`ShowTypeRepo::find_by_name`] backs
/// the pre-flight check that produces friendlier conflict errors.
pub struct ShowTypeRepo;

impl ShowTypeRepo {
    /// Insert a new show type, returning the created row.
    ///
    /// If `is_active` is `None`, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateShowType) -> Result<ShowType, sqlx::Error> {
        let query = format!(
            "INSERT INTO show_types (name, description, is_active)
             VALUES ($1, $2, COALESCE($3, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShowType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a show type by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShowType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM show_types WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, ShowType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a show type by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShowType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM show_types WHERE id = $1");
        sqlx::query_as::<_, ShowType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a show type by exact name match. Excludes soft-deleted rows.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<ShowType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM show_types WHERE name = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, ShowType>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List show types ordered by most recently created first.
    /// Excludes soft-deleted rows.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ShowType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM show_types
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ShowType>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List active show types. Excludes soft-deleted rows.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<ShowType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM show_types
             WHERE is_active AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ShowType>(&query).fetch_all(pool).await
    }

    /// Update a show type. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShowType,
    ) -> Result<Option<ShowType>, sqlx::Error> {
        let query = format!(
            "UPDATE show_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShowType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a show type by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE show_types SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
