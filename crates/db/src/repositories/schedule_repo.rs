//! Repository for the `schedule_entries` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use truckstop_core::types::DbId;

use crate::models::schedule::{CreateScheduleEntry, ScheduleEntry, UpdateScheduleEntry};

const COLUMNS: &str = "id, truck_id, venue_id, other_truck_name, other_venue_name, \
     date, start_time, end_time, event_name, created_at, updated_at";

/// Provides CRUD operations for schedule entries.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// Insert one schedule entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateScheduleEntry,
    ) -> Result<ScheduleEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedule_entries \
                (truck_id, venue_id, other_truck_name, other_venue_name, \
                 date, start_time, end_time, event_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(input.truck_id)
            .bind(input.venue_id)
            .bind(&input.other_truck_name)
            .bind(&input.other_venue_name)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.event_name)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ScheduleEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedule_entries WHERE id = $1");
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entries on or after a date, ordered by date then start time.
    /// The public upcoming-schedule view.
    pub async fn list_from_date(
        pool: &PgPool,
        from: NaiveDate,
    ) -> Result<Vec<ScheduleEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM schedule_entries \
             WHERE date >= $1 \
             ORDER BY date ASC, start_time ASC"
        );
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(from)
            .fetch_all(pool)
            .await
    }

    /// List every entry, ordered by date then start time. Super-admin view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ScheduleEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM schedule_entries ORDER BY date ASC, start_time ASC"
        );
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// List entries referencing any of the given trucks, ordered by date
    /// then start time. Owner dashboard view; an empty id list returns
    /// an empty vec.
    pub async fn list_for_trucks(
        pool: &PgPool,
        truck_ids: &[DbId],
    ) -> Result<Vec<ScheduleEntry>, sqlx::Error> {
        if truck_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM schedule_entries \
             WHERE truck_id = ANY($1) \
             ORDER BY date ASC, start_time ASC"
        );
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(truck_ids)
            .fetch_all(pool)
            .await
    }

    /// Replace an entry's contents by ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScheduleEntry,
    ) -> Result<Option<ScheduleEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE schedule_entries SET \
                truck_id = $2, \
                venue_id = $3, \
                other_truck_name = $4, \
                other_venue_name = $5, \
                date = $6, \
                start_time = $7, \
                end_time = $8, \
                event_name = $9, \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScheduleEntry>(&query)
            .bind(id)
            .bind(input.truck_id)
            .bind(input.venue_id)
            .bind(&input.other_truck_name)
            .bind(&input.other_venue_name)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.event_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedule_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
