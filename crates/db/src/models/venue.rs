//! Models for the `venues` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use truckstop_core::types::{DbId, Timestamp};

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    /// Nullable coordinates; absent values suppress map display and
    /// "get directions" actions in the presentation layer.
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a venue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub is_visible: Option<bool>,
}

/// DTO for updating a venue. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVenue {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub is_visible: Option<bool>,
}
