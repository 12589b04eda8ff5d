//! Unauthenticated routes backing the public marketing site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{analytics, schedule, trucks, venues};
use crate::state::AppState;

/// Public routes -- mounted at the `/api/v1` root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trucks", get(trucks::list_public))
        .route("/trucks/{id}", get(trucks::get_public))
        .route("/venues", get(venues::list_public))
        .route("/schedule", get(schedule::list_public))
        .route("/analytics/events", post(analytics::track))
}
