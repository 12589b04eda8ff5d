//! Repository for the `venues` table.

use sqlx::PgPool;
use truckstop_core::types::DbId;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue};

const COLUMNS: &str = "id, name, description, address, lat, lng, category, phone, website, \
     is_visible, created_at, updated_at";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues \
                (name, description, address, lat, lng, category, phone, website, is_visible) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.address)
            .bind(input.lat)
            .bind(input.lng)
            .bind(&input.category)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(input.is_visible)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every venue, name ascending. Admin view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues ORDER BY name ASC");
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// List only visible venues, name ascending. Public site view.
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<Venue>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM venues WHERE is_visible = TRUE ORDER BY name ASC");
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// Update a venue. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                address = COALESCE($4, address), \
                lat = COALESCE($5, lat), \
                lng = COALESCE($6, lng), \
                category = COALESCE($7, category), \
                phone = COALESCE($8, phone), \
                website = COALESCE($9, website), \
                is_visible = COALESCE($10, is_visible), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.address)
            .bind(input.lat)
            .bind(input.lng)
            .bind(&input.category)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(input.is_visible)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
