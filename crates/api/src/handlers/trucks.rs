//! Handlers for truck listing and administration.
//!
//! Public listings only ever expose visible trucks. Admin operations
//! are scoped by ownership: a truck owner manages their own trucks'
//! contact fields, the super-admin manages everything including
//! visibility and owner assignment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use truckstop_core::error::CoreError;
use truckstop_core::types::DbId;
use truckstop_db::models::truck::{CreateTruck, Truck, UpdateTruck};
use truckstop_db::repositories::TruckRepo;

use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a truck exists, returning the full row.
async fn ensure_truck_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Truck> {
    TruckRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Truck",
            id,
        })
    })
}

/// Whether the caller may manage this truck at all.
fn can_manage(auth: &AuthUser, truck: &Truck) -> bool {
    auth.is_super_admin || truck.owner_email.as_deref() == Some(auth.email.as_str())
}

// ---------------------------------------------------------------------------
// GET /trucks
// ---------------------------------------------------------------------------

/// List visible trucks for the public site.
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let trucks = TruckRepo::list_visible(&state.pool).await?;
    Ok(Json(DataResponse { data: trucks }))
}

// ---------------------------------------------------------------------------
// GET /trucks/{id}
// ---------------------------------------------------------------------------

/// Get one visible truck. Hidden trucks 404 on the public surface.
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let truck = ensure_truck_exists(&state.pool, id).await?;
    if !truck.is_visible {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Truck",
            id,
        }));
    }
    Ok(Json(DataResponse { data: truck }))
}

// ---------------------------------------------------------------------------
// GET /admin/trucks
// ---------------------------------------------------------------------------

/// List the caller's trucks, or every truck for the super-admin.
pub async fn list_admin(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let trucks = if auth.is_super_admin {
        TruckRepo::list_all(&state.pool).await?
    } else {
        TruckRepo::list_for_owner(&state.pool, &auth.email).await?
    };
    tracing::debug!(count = trucks.len(), "Listed admin trucks");
    Ok(Json(DataResponse { data: trucks }))
}

// ---------------------------------------------------------------------------
// POST /admin/trucks
// ---------------------------------------------------------------------------

/// Create a truck.
///
/// Non-super-admin callers always become the owner of what they create
/// and cannot pre-set visibility.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateTruck>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "truck name must not be blank".into(),
        )));
    }

    if !auth.is_super_admin {
        input.owner_email = Some(auth.email.clone());
        input.is_visible = None;
    }

    let created = TruckRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Truck created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /admin/trucks/{id}
// ---------------------------------------------------------------------------

/// Update a truck's fields.
///
/// Owners may edit name and contact fields on their own trucks;
/// visibility changes are super-admin only.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTruck>,
) -> AppResult<impl IntoResponse> {
    let truck = ensure_truck_exists(&state.pool, id).await?;

    if !can_manage(&auth, &truck) {
        return Err(AppError::Core(CoreError::Forbidden(
            "you do not own this truck".into(),
        )));
    }
    if input.is_visible.is_some() && !auth.is_super_admin {
        return Err(AppError::Core(CoreError::Forbidden(
            "only the super-admin can change visibility".into(),
        )));
    }
    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "truck name must not be blank".into(),
            )));
        }
    }

    let updated = TruckRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Truck",
            id,
        }))?;
    tracing::info!(id = updated.id, "Truck updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/trucks/{id}
// ---------------------------------------------------------------------------

/// Delete a truck, cascading to its schedule entries. Super-admin only.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    auth.require_super_admin()?;

    let removed = TruckRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Truck",
            id,
        }));
    }
    tracing::info!(id, "Truck deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// PUT /admin/trucks/{id}/owner
// ---------------------------------------------------------------------------

/// Request body for owner assignment.
#[derive(Debug, Deserialize)]
pub struct AssignOwnerRequest {
    pub owner_email: String,
}

/// Assign a truck to a user by email. Super-admin only.
pub async fn assign_owner(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignOwnerRequest>,
) -> AppResult<impl IntoResponse> {
    auth.require_super_admin()?;

    let email = input.owner_email.trim();
    if email.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "owner_email must not be blank".into(),
        )));
    }

    let updated = TruckRepo::set_owner(&state.pool, id, Some(email))
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Truck",
            id,
        }))?;
    tracing::info!(id, owner = %email, "Truck owner assigned");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/trucks/{id}/owner
// ---------------------------------------------------------------------------

/// Remove a truck's owner assignment. Super-admin only.
pub async fn unassign_owner(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    auth.require_super_admin()?;

    let updated = TruckRepo::set_owner(&state.pool, id, None)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Truck",
            id,
        }))?;
    tracing::info!(id, "Truck owner unassigned");
    Ok(Json(DataResponse { data: updated }))
}
