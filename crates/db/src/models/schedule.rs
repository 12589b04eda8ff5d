//! Models for the `schedule_entries` table.
//!
//! Per side (truck, venue), a persisted entry carries exactly one of
//! {catalog id, freeform "other" name}. Handlers build rows through
//! [`truckstop_core::schedule::ResolvedParty`], which makes the invalid
//! combinations unrepresentable; the CHECK constraints in the schema
//! are the storage-level backstop.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;
use truckstop_core::types::{DbId, Timestamp};

/// A row from the `schedule_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduleEntry {
    pub id: DbId,
    pub truck_id: Option<DbId>,
    pub venue_id: Option<DbId>,
    pub other_truck_name: Option<String>,
    pub other_venue_name: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub event_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting one schedule entry (one expanded date).
#[derive(Debug, Clone)]
pub struct CreateScheduleEntry {
    pub truck_id: Option<DbId>,
    pub venue_id: Option<DbId>,
    pub other_truck_name: Option<String>,
    pub other_venue_name: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub event_name: Option<String>,
}

/// DTO for replacing a single schedule entry by id.
///
/// Edits always target one entry with single-date semantics and carry
/// the full new state; recurrence expansion applies only to creation.
/// Handlers construct this from a validated intent rather than
/// deserializing it, so the one-of-{reference, freeform} convention is
/// already enforced per side.
#[derive(Debug, Clone)]
pub struct UpdateScheduleEntry {
    pub truck_id: Option<DbId>,
    pub venue_id: Option<DbId>,
    pub other_truck_name: Option<String>,
    pub other_venue_name: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub event_name: Option<String>,
}
