pub mod health;
pub mod public;
pub mod schedule;
pub mod sync;
pub mod trucks;
pub mod venues;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /trucks                              visible trucks (public)
/// /trucks/{id}                         one visible truck (public)
/// /venues                              visible venues (public)
/// /schedule                            upcoming entries (public)
/// /analytics/events                    record engagement event (public, fire-and-forget)
///
/// /admin/trucks                        list own/all, create (auth)
/// /admin/trucks/{id}                   update, delete
/// /admin/trucks/{id}/owner             assign, unassign owner (super-admin)
///
/// /admin/venues                        list all, create (super-admin)
/// /admin/venues/{id}                   update, delete (super-admin)
///
/// /admin/schedule                      list own/all, bulk create (auth)
/// /admin/schedule/{id}                 update, delete
///
/// /admin/airtable-sync                 preview (GET), commit (POST) (super-admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin/trucks", trucks::admin_router())
        .nest("/admin/venues", venues::admin_router())
        .nest("/admin/schedule", schedule::admin_router())
        .nest("/admin/airtable-sync", sync::admin_router())
}
