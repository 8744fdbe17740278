//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use shared::request::{CancelBookingRequest, CreateBookingRequest};
use shared::response::CancellationOutcome;

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationFilter, ReservationUpdate};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::AppResult;

/// GET /api/businesses/:business_id/reservations?status=&date=
pub async fn list(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
    Query(filter): Query<ReservationFilter>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.lifecycle.list(&business_id, filter).await?;
    Ok(Json(reservations))
}

/// POST /api/businesses/:business_id/reservations
pub async fn create(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<Json<Reservation>> {
    validate_optional_text(payload.notes.as_deref(), "notes", MAX_NOTE_LEN)?;
    validate_optional_text(
        payload.special_requests.as_deref(),
        "special_requests",
        MAX_NOTE_LEN,
    )?;
    let reservation = state.lifecycle.create(&business_id, payload).await?;
    Ok(Json(reservation))
}

/// GET /api/reservations/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.lifecycle.find(&id).await?;
    Ok(Json(reservation))
}

/// PUT /api/reservations/:id - modify details, re-admitting slot moves
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    validate_optional_text(payload.notes.as_deref(), "notes", MAX_NOTE_LEN)?;
    validate_optional_text(
        payload.special_requests.as_deref(),
        "special_requests",
        MAX_NOTE_LEN,
    )?;
    let reservation = state.lifecycle.update(&id, payload).await?;
    Ok(Json(reservation))
}

/// POST /api/reservations/:id/confirm
pub async fn confirm(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.lifecycle.confirm(&id).await?;
    Ok(Json(reservation))
}

/// POST /api/reservations/:id/cancel
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CancelBookingRequest>,
) -> AppResult<Json<CancellationOutcome>> {
    let outcome = state.lifecycle.cancel(&id, payload).await?;
    Ok(Json(outcome))
}

/// DELETE /api/reservations/:id - hard delete with cascade
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.lifecycle.delete(&id).await?;
    Ok(Json(reservation))
}
