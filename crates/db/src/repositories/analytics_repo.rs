//! Repository for the `analytics_events` table.

use sqlx::PgPool;
use truckstop_core::types::DbId;

use crate::models::analytics::CreateAnalyticsEvent;

/// Write-side access to engagement events.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Record one event. Returns the new row id.
    ///
    /// Callers treat failures as best-effort: the API layer logs and
    /// discards them so instrumentation never breaks primary
    /// functionality.
    pub async fn insert(pool: &PgPool, input: &CreateAnalyticsEvent) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO analytics_events (event_type, truck_id, metadata) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.event_type)
        .bind(input.truck_id)
        .bind(&input.metadata)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }
}
