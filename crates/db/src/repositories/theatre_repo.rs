//! Repository for the `theatres` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::theatre::{CreateTheatre, Theatre, TheatreWithCoordinates, UpdateTheatre};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, location_id, theatre_type_id, name, description, capacity, \
    address, phone, email, website, image_url, is_featured, is_active, \
    deleted_at, created_at, updated_at";

/// Qualified column list for queries that join other tables.
const QUALIFIED_COLUMNS: &str = "t.id, t.location_id, t.theatre_type_id, t.name, \
    t.description, t.capacity, t.address, t.phone, t.email, t.website, t.image_url, \
    t.is_featured, t.is_active, t.deleted_at, t.created_at, t.updated_at";

/// Provides CRUD and query operations for theatres.
pub struct TheatreRepo;

impl TheatreRepo {
    /// Insert a new theatre, returning the created row.
    ///
    /// If `is_featured` is `None`, defaults to `false`.
    /// If `is_active` is `None`, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateTheatre) -> Result<Theatre, sqlx::Error> {
        let query = format!(
            "INSERT INTO theatres
                (location_id, theatre_type_id, name, description, capacity,
                 address, phone, email, website, image_url, is_featured, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     COALESCE($11, false), COALESCE($12, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theatre>(&query)
            .bind(input.location_id)
            .bind(input.theatre_type_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.capacity)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.website)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a theatre by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Theatre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theatres WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Theatre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a theatre by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Theatre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM theatres WHERE id = $1");
        sqlx::query_as::<_, Theatre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List theatres ordered by most recently created first.
    /// Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Theatre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM theatres
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Theatre>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List active theatres. Excludes soft-deleted rows.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Theatre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM theatres
             WHERE is_active AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Theatre>(&query).fetch_all(pool).await
    }

    /// List featured theatres. Excludes soft-deleted rows.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Theatre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM theatres
             WHERE is_featured AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Theatre>(&query).fetch_all(pool).await
    }

    /// List theatres at a given location. Excludes soft-deleted rows.
    pub async fn list_by_location(
        pool: &PgPool,
        location_id: DbId,
    ) -> Result<Vec<Theatre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM theatres
             WHERE location_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Theatre>(&query)
            .bind(location_id)
            .fetch_all(pool)
            .await
    }

    /// List theatres of a given type. Excludes soft-deleted rows.
    pub async fn list_by_theatre_type(
        pool: &PgPool,
        theatre_type_id: DbId,
    ) -> Result<Vec<Theatre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM theatres
             WHERE theatre_type_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Theatre>(&query)
            .bind(theatre_type_id)
            .fetch_all(pool)
            .await
    }

    /// List theatres joined with their location's coordinates, for
    /// proximity scans.
    ///
    /// A theatre whose location is soft-deleted or missing either
    /// coordinate is not a proximity candidate, so such rows are excluded
    /// here rather than in the caller.
    pub async fn list_with_coordinates(
        pool: &PgPool,
    ) -> Result<Vec<TheatreWithCoordinates>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS}, l.latitude, l.longitude
             FROM theatres t
             JOIN locations l ON l.id = t.location_id AND l.deleted_at IS NULL
             WHERE t.deleted_at IS NULL
               AND l.latitude IS NOT NULL
               AND l.longitude IS NOT NULL"
        );
        sqlx::query_as::<_, TheatreWithCoordinates>(&query)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over name and description.
    /// Excludes soft-deleted rows.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Theatre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM theatres
             WHERE (name ILIKE $1 OR description ILIKE $1)
               AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Theatre>(&query)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await
    }

    /// Update a theatre. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTheatre,
    ) -> Result<Option<Theatre>, sqlx::Error> {
        let query = format!(
            "UPDATE theatres SET
                location_id = COALESCE($2, location_id),
                theatre_type_id = COALESCE($3, theatre_type_id),
                name = COALESCE($4, name),
                description = COALESCE($5, description),
                capacity = COALESCE($6, capacity),
                address = COALESCE($7, address),
                phone = COALESCE($8, phone),
                email = COALESCE($9, email),
                website = COALESCE($10, website),
                image_url = COALESCE($11, image_url),
                is_featured = COALESCE($12, is_featured),
                is_active = COALESCE($13, is_active)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theatre>(&query)
            .bind(id)
            .bind(input.location_id)
            .bind(input.theatre_type_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.capacity)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.website)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a theatre by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE theatres SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
