//! Route definitions for truck administration.
//!
//! ```text
//! GET    /                     list_admin
//! POST   /                     create
//! PUT    /{id}                 update
//! DELETE /{id}                 delete
//! PUT    /{id}/owner           assign_owner
//! DELETE /{id}/owner           unassign_owner
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::trucks;
use crate::state::AppState;

/// Truck admin routes -- mounted at `/admin/trucks`.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(trucks::list_admin).post(trucks::create))
        .route("/{id}", put(trucks::update).delete(trucks::delete))
        .route(
            "/{id}/owner",
            put(trucks::assign_owner).delete(trucks::unassign_owner),
        )
}
