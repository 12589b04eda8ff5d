//! Handler for engagement-event tracking from the public site.
//!
//! The insert is spawned fire-and-forget: the response never waits on
//! the database, and write failures are logged and discarded so
//! instrumentation can never break the site.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use truckstop_core::error::CoreError;
use truckstop_db::models::analytics::{CreateAnalyticsEvent, EVENT_TYPES};
use truckstop_db::repositories::AnalyticsRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /analytics/events
///
/// Accept one event and return 202 immediately.
pub async fn track(
    State(state): State<AppState>,
    Json(input): Json<CreateAnalyticsEvent>,
) -> AppResult<StatusCode> {
    if !EVENT_TYPES.contains(&input.event_type.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "unknown event type: {}",
            input.event_type
        ))));
    }

    let pool = state.pool.clone();
    tokio::spawn(async move {
        if let Err(err) = AnalyticsRepo::insert(&pool, &input).await {
            // Intentionally discarded; analytics is best-effort.
            tracing::debug!(error = %err, "Analytics insert failed");
        }
    });

    Ok(StatusCode::ACCEPTED)
}
