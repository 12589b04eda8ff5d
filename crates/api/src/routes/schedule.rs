//! Route definitions for schedule administration.
//!
//! ```text
//! GET    /                     list_admin
//! POST   /                     create_bulk (one row per expanded date)
//! PUT    /{id}                 update (single-date)
//! DELETE /{id}                 delete
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Schedule admin routes -- mounted at `/admin/schedule`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(schedule::list_admin).post(schedule::create_bulk))
        .route("/{id}", put(schedule::update).delete(schedule::delete))
}
