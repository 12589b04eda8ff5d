use std::sync::Arc;

use truckstop_airtable::AirtableClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: truckstop_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// External calendar API client.
    pub airtable: Arc<AirtableClient>,
}
