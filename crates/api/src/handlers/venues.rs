//! Handlers for venue listing and administration. Venues are entirely
//! super-admin-owned; the public surface only reads visible ones.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use truckstop_core::error::CoreError;
use truckstop_core::types::DbId;
use truckstop_db::models::venue::{CreateVenue, UpdateVenue};
use truckstop_db::repositories::VenueRepo;

use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /venues
// ---------------------------------------------------------------------------

/// List visible venues for the public site.
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let venues = VenueRepo::list_visible(&state.pool).await?;
    Ok(Json(DataResponse { data: venues }))
}

// ---------------------------------------------------------------------------
// GET /admin/venues
// ---------------------------------------------------------------------------

/// List every venue, hidden ones included. Super-admin only.
pub async fn list_admin(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    auth.require_super_admin()?;
    let venues = VenueRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: venues }))
}

// ---------------------------------------------------------------------------
// POST /admin/venues
// ---------------------------------------------------------------------------

/// Create a venue. Super-admin only.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateVenue>,
) -> AppResult<impl IntoResponse> {
    auth.require_super_admin()?;

    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "venue name must not be blank".into(),
        )));
    }

    let created = VenueRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Venue created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// PUT /admin/venues/{id}
// ---------------------------------------------------------------------------

/// Update a venue. Super-admin only.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVenue>,
) -> AppResult<impl IntoResponse> {
    auth.require_super_admin()?;

    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "venue name must not be blank".into(),
            )));
        }
    }

    let updated = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id,
        }))?;
    tracing::info!(id = updated.id, "Venue updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/venues/{id}
// ---------------------------------------------------------------------------

/// Delete a venue. Super-admin only.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    auth.require_super_admin()?;

    let removed = VenueRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Venue",
            id,
        }));
    }
    tracing::info!(id, "Venue deleted");
    Ok(StatusCode::NO_CONTENT)
}
