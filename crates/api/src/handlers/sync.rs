//! Handlers for the calendar import surface: a preview of classified
//! external rows, and a commit that persists selected rows locally and
//! marks them synced at the source.
//!
//! Commit semantics are at-least-once: a row can be persisted locally
//! yet remain unmarked externally when the mark-synced call fails,
//! which risks a duplicate import on a later run. That failure is
//! logged and never rolls back the local inserts.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use truckstop_airtable::CalendarRow;
use truckstop_core::matching::{classify_row, find_match, RowStatus, SideMatch};
use truckstop_core::timeparse::normalize_time;
use truckstop_core::types::DbId;
use truckstop_db::models::schedule::CreateScheduleEntry;
use truckstop_db::models::truck::Truck;
use truckstop_db::models::venue::Venue;
use truckstop_db::repositories::{ScheduleRepo, TruckRepo, VenueRepo};

use crate::auth::AuthUser;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared row resolution
// ---------------------------------------------------------------------------

/// A catalog match reduced to what the preview needs.
#[derive(Debug, Serialize)]
pub struct MatchedRef {
    pub id: DbId,
    pub name: String,
}

fn match_truck<'a>(name: Option<&str>, trucks: &'a [Truck]) -> Option<&'a Truck> {
    name.and_then(|n| find_match(n, trucks, |t: &Truck| t.name.as_str()))
}

fn match_venue<'a>(name: Option<&str>, venues: &'a [Venue]) -> Option<&'a Venue> {
    name.and_then(|n| find_match(n, venues, |v: &Venue| v.name.as_str()))
}

fn side_match(named: bool, matched: bool) -> SideMatch {
    match (named, matched) {
        (false, _) => SideMatch::Unnamed,
        (true, true) => SideMatch::Matched,
        (true, false) => SideMatch::Unmatched,
    }
}

// ---------------------------------------------------------------------------
// GET /admin/airtable-sync
// ---------------------------------------------------------------------------

/// Query parameters for the preview endpoint.
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    /// When false, include already-synced rows. Defaults to true.
    pub unsynced: Option<bool>,
}

/// One classified external row.
#[derive(Debug, Serialize)]
pub struct SyncPreviewItem {
    pub airtable_id: String,
    pub airtable_name: String,
    pub truck_name: Option<String>,
    pub venue_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub event_name: Option<String>,
    pub matched_truck: Option<MatchedRef>,
    pub matched_venue: Option<MatchedRef>,
    pub status: RowStatus,
}

/// Row counts for the preview header.
#[derive(Debug, Serialize)]
pub struct SyncSummary {
    pub total: usize,
    pub ready: usize,
    pub issues: usize,
}

#[derive(Debug, Serialize)]
pub struct SyncPreview {
    pub preview: Vec<SyncPreviewItem>,
    pub summary: SyncSummary,
}

/// Build the import preview: fetch external rows, match them against
/// the local catalog, and classify each one. Super-admin only.
pub async fn preview(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> AppResult<impl IntoResponse> {
    auth.require_super_admin()?;

    let unsynced_only = params.unsynced.unwrap_or(true);
    let rows = state.airtable.fetch_calendar(unsynced_only).await?;
    let trucks = TruckRepo::list_all(&state.pool).await?;
    let venues = VenueRepo::list_all(&state.pool).await?;

    let preview: Vec<SyncPreviewItem> = rows
        .iter()
        .map(|row| {
            let matched_truck = match_truck(row.truck_name.as_deref(), &trucks);
            let matched_venue = match_venue(row.venue_name.as_deref(), &venues);

            let status = classify_row(
                side_match(row.truck_name.is_some(), matched_truck.is_some()),
                side_match(row.venue_name.is_some(), matched_venue.is_some()),
                row.date.is_some(),
                row.start_time.as_deref().is_some_and(|t| normalize_time(t).is_some()),
                row.end_time.as_deref().is_some_and(|t| normalize_time(t).is_some()),
            );

            SyncPreviewItem {
                airtable_id: row.airtable_id.clone(),
                airtable_name: row.name.clone(),
                truck_name: row.truck_name.clone(),
                venue_name: row.venue_name.clone(),
                date: row.date,
                start_time: row.start_time.clone(),
                end_time: row.end_time.clone(),
                event_name: row.event_name.clone(),
                matched_truck: matched_truck.map(|t| MatchedRef {
                    id: t.id,
                    name: t.name.clone(),
                }),
                matched_venue: matched_venue.map(|v| MatchedRef {
                    id: v.id,
                    name: v.name.clone(),
                }),
                status,
            }
        })
        .collect();

    let ready = preview
        .iter()
        .filter(|p| p.status == RowStatus::Ready)
        .count();
    let summary = SyncSummary {
        total: preview.len(),
        ready,
        issues: preview.len() - ready,
    };
    tracing::info!(total = summary.total, ready, "Built sync preview");

    Ok(Json(DataResponse {
        data: SyncPreview { preview, summary },
    }))
}

// ---------------------------------------------------------------------------
// POST /admin/airtable-sync
// ---------------------------------------------------------------------------

/// One row selected for import, with optional manual match overrides.
#[derive(Debug, Deserialize)]
pub struct SyncCommitItem {
    pub airtable_id: String,
    pub truck_id: Option<DbId>,
    pub venue_id: Option<DbId>,
}

/// Request body for the commit endpoint.
#[derive(Debug, Deserialize)]
pub struct SyncCommitRequest {
    pub items: Vec<SyncCommitItem>,
}

/// Per-row commit outcome.
#[derive(Debug, Serialize)]
pub struct SyncItemResult {
    pub airtable_id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SyncCommitSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
pub struct SyncCommitResult {
    pub results: Vec<SyncItemResult>,
    pub summary: SyncCommitSummary,
}

/// Persist the selected external rows as local schedule entries, then
/// mark the source rows synced. Super-admin only.
///
/// Matches are re-resolved here rather than trusting a stale preview.
/// Each row is independent; one failure does not block the rest.
pub async fn commit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(request): Json<SyncCommitRequest>,
) -> AppResult<impl IntoResponse> {
    auth.require_super_admin()?;

    // Fetch everything, synced rows included, so overrides can target
    // any row the preview showed.
    let rows = state.airtable.fetch_calendar(false).await?;
    let trucks = TruckRepo::list_all(&state.pool).await?;
    let venues = VenueRepo::list_all(&state.pool).await?;

    let mut results = Vec::with_capacity(request.items.len());
    let mut synced_ids = Vec::new();

    for item in &request.items {
        match commit_one(&state, item, &rows, &trucks, &venues).await {
            Ok(()) => {
                synced_ids.push(item.airtable_id.clone());
                results.push(SyncItemResult {
                    airtable_id: item.airtable_id.clone(),
                    success: true,
                    error: None,
                });
            }
            Err(message) => {
                tracing::warn!(airtable_id = %item.airtable_id, error = %message, "Sync row failed");
                results.push(SyncItemResult {
                    airtable_id: item.airtable_id.clone(),
                    success: false,
                    error: Some(message),
                });
            }
        }
    }

    // Mark-synced failures are logged but never undo the local inserts;
    // an unmarked row may be imported again on a later run.
    if !synced_ids.is_empty() {
        if let Err(err) = state.airtable.mark_synced(&synced_ids).await {
            tracing::error!(error = %err, "Failed to mark rows as synced");
        }
    }

    let successful = synced_ids.len();
    let summary = SyncCommitSummary {
        total: request.items.len(),
        successful,
        failed: request.items.len() - successful,
    };
    tracing::info!(
        total = summary.total,
        successful,
        failed = summary.failed,
        "Sync commit finished"
    );

    Ok(Json(DataResponse {
        data: SyncCommitResult { results, summary },
    }))
}

/// Resolve and persist one external row. Returns a human-readable
/// failure message; callers report it per row.
async fn commit_one(
    state: &AppState,
    item: &SyncCommitItem,
    rows: &[CalendarRow],
    trucks: &[Truck],
    venues: &[Venue],
) -> Result<(), String> {
    let row = rows
        .iter()
        .find(|r| r.airtable_id == item.airtable_id)
        .ok_or_else(|| "Entry not found in calendar source".to_string())?;

    let input = resolve_row(item, row, trucks, venues)?;

    ScheduleRepo::create(&state.pool, &input)
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

/// Turn one external row into an insertable entry: apply manual
/// overrides, re-match names against the catalog, normalize times.
///
/// A side that matched keeps only the catalog id; an unmatched side
/// keeps only the freeform external name.
fn resolve_row(
    item: &SyncCommitItem,
    row: &CalendarRow,
    trucks: &[Truck],
    venues: &[Venue],
) -> Result<CreateScheduleEntry, String> {
    let truck_id = item
        .truck_id
        .or_else(|| match_truck(row.truck_name.as_deref(), trucks).map(|t| t.id));
    let venue_id = item
        .venue_id
        .or_else(|| match_venue(row.venue_name.as_deref(), venues).map(|v| v.id));

    let date = row.date.ok_or_else(|| "Missing date".to_string())?;
    let start_time = parse_normalized(row.start_time.as_deref())
        .ok_or_else(|| format!("Unusable start time: {:?}", row.start_time))?;
    let end_time = parse_normalized(row.end_time.as_deref())
        .ok_or_else(|| format!("Unusable end time: {:?}", row.end_time))?;

    Ok(CreateScheduleEntry {
        truck_id,
        venue_id,
        other_truck_name: if truck_id.is_none() {
            row.truck_name.clone()
        } else {
            None
        },
        other_venue_name: if venue_id.is_none() {
            row.venue_name.clone()
        } else {
            None
        },
        date,
        start_time,
        end_time,
        event_name: row.event_name.clone(),
    })
}

/// Normalize an external time string and parse it as a wall-clock time.
fn parse_normalized(raw: Option<&str>) -> Option<NaiveTime> {
    let normalized = normalize_time(raw?)?;
    NaiveTime::parse_from_str(&normalized, "%H:%M:%S").ok()
}
