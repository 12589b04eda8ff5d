//! Route definitions for the calendar import surface.
//!
//! ```text
//! GET    /                     preview (?unsynced=true|false)
//! POST   /                     commit
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::sync;
use crate::state::AppState;

/// Import routes -- mounted at `/admin/airtable-sync`.
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", get(sync::preview).post(sync::commit))
}
