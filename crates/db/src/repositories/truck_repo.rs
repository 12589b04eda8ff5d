//! Repository for the `trucks` table.

use sqlx::PgPool;
use truckstop_core::types::DbId;

use crate::models::truck::{CreateTruck, Truck, UpdateTruck};

const COLUMNS: &str = "id, name, description, cuisine_type, phone, facebook, instagram, \
     owner_email, is_visible, created_at, updated_at";

/// Provides CRUD operations for trucks.
pub struct TruckRepo;

impl TruckRepo {
    /// Insert a new truck, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTruck) -> Result<Truck, sqlx::Error> {
        let query = format!(
            "INSERT INTO trucks \
                (name, description, cuisine_type, phone, facebook, instagram, \
                 owner_email, is_visible) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Truck>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.cuisine_type)
            .bind(&input.phone)
            .bind(&input.facebook)
            .bind(&input.instagram)
            .bind(&input.owner_email)
            .bind(input.is_visible)
            .fetch_one(pool)
            .await
    }

    /// Find a truck by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Truck>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trucks WHERE id = $1");
        sqlx::query_as::<_, Truck>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every truck, name ascending. Admin view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Truck>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trucks ORDER BY name ASC");
        sqlx::query_as::<_, Truck>(&query).fetch_all(pool).await
    }

    /// List only visible trucks, name ascending. Public site view.
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<Truck>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM trucks WHERE is_visible = TRUE ORDER BY name ASC");
        sqlx::query_as::<_, Truck>(&query).fetch_all(pool).await
    }

    /// List trucks owned by one user, name ascending.
    pub async fn list_for_owner(pool: &PgPool, email: &str) -> Result<Vec<Truck>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM trucks WHERE owner_email = $1 ORDER BY name ASC");
        sqlx::query_as::<_, Truck>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
    }

    /// Update a truck. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTruck,
    ) -> Result<Option<Truck>, sqlx::Error> {
        let query = format!(
            "UPDATE trucks SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                cuisine_type = COALESCE($4, cuisine_type), \
                phone = COALESCE($5, phone), \
                facebook = COALESCE($6, facebook), \
                instagram = COALESCE($7, instagram), \
                is_visible = COALESCE($8, is_visible), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Truck>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.cuisine_type)
            .bind(&input.phone)
            .bind(&input.facebook)
            .bind(&input.instagram)
            .bind(input.is_visible)
            .fetch_optional(pool)
            .await
    }

    /// Assign or clear the owning user. `None` unassigns.
    pub async fn set_owner(
        pool: &PgPool,
        id: DbId,
        owner_email: Option<&str>,
    ) -> Result<Option<Truck>, sqlx::Error> {
        let query = format!(
            "UPDATE trucks SET owner_email = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Truck>(&query)
            .bind(id)
            .bind(owner_email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a truck by ID, cascading to its schedule entries.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trucks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
