//! Models for the `analytics_events` table.

use serde::Deserialize;
use truckstop_core::types::DbId;

/// Event types the public site reports.
pub const EVENT_TYPES: &[&str] = &[
    "profile_view",
    "map_pin_click",
    "social_click",
    "phone_click",
    "website_click",
    "menu_view",
    "directions_click",
];

/// DTO for recording one engagement event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnalyticsEvent {
    pub event_type: String,
    pub truck_id: DbId,
    #[serde(default)]
    pub metadata: serde_json::Value,
}
