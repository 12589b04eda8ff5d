//! Route definitions for venue administration.
//!
//! ```text
//! GET    /                     list_admin
//! POST   /                     create
//! PUT    /{id}                 update
//! DELETE /{id}                 delete
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::venues;
use crate::state::AppState;

/// Venue admin routes -- mounted at `/admin/venues`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(venues::list_admin).post(venues::create))
        .route("/{id}", put(venues::update).delete(venues::delete))
}
