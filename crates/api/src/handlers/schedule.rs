//! Handlers for the schedule: public upcoming listing, owner/admin
//! listing, bulk creation from a date selection, and single-entry
//! edit/delete.
//!
//! Bulk creation is deliberately not transactional: one insert per
//! expanded date, issued sequentially, each reported individually.
//! Earlier successes are not rolled back when a later date fails.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use truckstop_core::eastern::today_eastern;
use truckstop_core::error::CoreError;
use truckstop_core::schedule::{validate_intent, PartySelection, ResolvedParty, ScheduleIntent};
use truckstop_core::types::DbId;
use truckstop_db::models::schedule::{CreateScheduleEntry, ScheduleEntry, UpdateScheduleEntry};
use truckstop_db::repositories::{ScheduleRepo, TruckRepo};

use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Authorization helpers
// ---------------------------------------------------------------------------

/// Check that the caller may write schedule entries for this truck side.
///
/// The super-admin may schedule anything. Owners may only schedule
/// their own catalog trucks; freeform truck names are super-admin
/// territory since they bypass ownership entirely.
async fn authorize_truck_side(
    auth: &AuthUser,
    pool: &sqlx::PgPool,
    truck: &ResolvedParty,
) -> AppResult<()> {
    if auth.is_super_admin {
        return Ok(());
    }
    match truck.id {
        Some(id) => {
            let truck = TruckRepo::find_by_id(pool, id).await?.ok_or(AppError::Core(
                CoreError::NotFound {
                    entity: "Truck",
                    id,
                },
            ))?;
            if truck.owner_email.as_deref() != Some(auth.email.as_str()) {
                return Err(AppError::Core(CoreError::Forbidden(
                    "you do not own this truck".into(),
                )));
            }
            Ok(())
        }
        None => Err(AppError::Core(CoreError::Forbidden(
            "only the super-admin can schedule non-catalog trucks".into(),
        ))),
    }
}

/// Check that the caller may modify an existing entry.
async fn authorize_existing_entry(
    auth: &AuthUser,
    pool: &sqlx::PgPool,
    entry: &ScheduleEntry,
) -> AppResult<()> {
    let as_party = ResolvedParty {
        id: entry.truck_id,
        other_name: entry.other_truck_name.clone(),
    };
    authorize_truck_side(auth, pool, &as_party).await
}

// ---------------------------------------------------------------------------
// GET /schedule
// ---------------------------------------------------------------------------

/// List upcoming entries (today onward, US Eastern) for the public site.
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = ScheduleRepo::list_from_date(&state.pool, today_eastern()).await?;
    Ok(Json(DataResponse { data: entries }))
}

// ---------------------------------------------------------------------------
// GET /admin/schedule
// ---------------------------------------------------------------------------

/// List the caller's trucks' entries, or everything for the super-admin.
pub async fn list_admin(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let entries = if auth.is_super_admin {
        ScheduleRepo::list_all(&state.pool).await?
    } else {
        let trucks = TruckRepo::list_for_owner(&state.pool, &auth.email).await?;
        let ids: Vec<DbId> = trucks.iter().map(|t| t.id).collect();
        ScheduleRepo::list_for_trucks(&state.pool, &ids).await?
    };
    Ok(Json(DataResponse { data: entries }))
}

// ---------------------------------------------------------------------------
// POST /admin/schedule
// ---------------------------------------------------------------------------

/// Outcome of one expanded date's insert.
#[derive(Debug, Serialize)]
pub struct DateOutcome {
    pub date: NaiveDate,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a bulk create: per-date outcomes plus the created rows.
#[derive(Debug, Serialize)]
pub struct BulkCreateResult {
    pub results: Vec<DateOutcome>,
    pub created: Vec<ScheduleEntry>,
    pub succeeded: usize,
    pub failed: usize,
}

/// Create one entry per expanded date of the intent's date selection.
pub async fn create_bulk(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(intent): Json<ScheduleIntent>,
) -> AppResult<impl IntoResponse> {
    let validated = validate_intent(&intent, today_eastern()).map_err(AppError::Core)?;
    authorize_truck_side(&auth, &state.pool, &validated.truck).await?;

    let mut results = Vec::with_capacity(validated.dates.len());
    let mut created = Vec::new();

    for date in &validated.dates {
        let input = CreateScheduleEntry {
            truck_id: validated.truck.id,
            venue_id: validated.venue.id,
            other_truck_name: validated.truck.other_name.clone(),
            other_venue_name: validated.venue.other_name.clone(),
            date: *date,
            start_time: validated.start_time,
            end_time: validated.end_time,
            event_name: validated.event_name.clone(),
        };

        match ScheduleRepo::create(&state.pool, &input).await {
            Ok(entry) => {
                created.push(entry);
                results.push(DateOutcome {
                    date: *date,
                    success: true,
                    error: None,
                });
            }
            Err(err) => {
                tracing::warn!(date = %date, error = %err, "Schedule insert failed");
                results.push(DateOutcome {
                    date: *date,
                    success: false,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    let succeeded = created.len();
    let failed = results.len() - succeeded;
    tracing::info!(succeeded, failed, "Bulk schedule create finished");

    let status = if failed == 0 {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(DataResponse {
            data: BulkCreateResult {
                results,
                created,
                succeeded,
                failed,
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// PUT /admin/schedule/{id}
// ---------------------------------------------------------------------------

/// Request body for editing one entry. Always single-date; recurrence
/// applies only to creation.
#[derive(Debug, Deserialize)]
pub struct EditScheduleRequest {
    pub truck: PartySelection,
    pub venue: PartySelection,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub event_name: Option<String>,
}

/// Replace one entry's contents.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EditScheduleRequest>,
) -> AppResult<impl IntoResponse> {
    let existing = ScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ScheduleEntry",
            id,
        }))?;
    authorize_existing_entry(&auth, &state.pool, &existing).await?;

    let truck = input.truck.resolve("truck").map_err(AppError::Core)?;
    let venue = input.venue.resolve("venue").map_err(AppError::Core)?;
    authorize_truck_side(&auth, &state.pool, &truck).await?;

    let start_time = input.start_time.ok_or_else(|| {
        AppError::Core(CoreError::Validation("start_time is required".into()))
    })?;
    let end_time = input.end_time.ok_or_else(|| {
        AppError::Core(CoreError::Validation("end_time is required".into()))
    })?;

    let update = UpdateScheduleEntry {
        truck_id: truck.id,
        venue_id: venue.id,
        other_truck_name: truck.other_name,
        other_venue_name: venue.other_name,
        date: input.date,
        start_time,
        end_time,
        event_name: input
            .event_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
    };

    let updated = ScheduleRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ScheduleEntry",
            id,
        }))?;
    tracing::info!(id, "Schedule entry updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/schedule/{id}
// ---------------------------------------------------------------------------

/// Delete one entry.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = ScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ScheduleEntry",
            id,
        }))?;
    authorize_existing_entry(&auth, &state.pool, &existing).await?;

    ScheduleRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Schedule entry deleted");
    Ok(StatusCode::NO_CONTENT)
}
