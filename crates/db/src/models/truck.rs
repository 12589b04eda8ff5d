//! Models for the `trucks` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use truckstop_core::types::{DbId, Timestamp};

/// A row from the `trucks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Truck {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub phone: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    /// Email of the owning user in the external identity system.
    /// A lookup key, not a foreign key.
    pub owner_email: Option<String>,
    pub is_visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a truck.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTruck {
    pub name: String,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub phone: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub owner_email: Option<String>,
    pub is_visible: Option<bool>,
}

/// DTO for updating a truck. Only non-`None` fields are applied.
///
/// `owner_email` is deliberately absent: owner assignment has its own
/// super-admin-only operation. `is_visible` is accepted here but the
/// handler rejects it from non-super-admin callers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTruck {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub phone: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub is_visible: Option<bool>,
}
