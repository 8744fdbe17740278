//! Room API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::BusinessKind;

use crate::core::ServerState;
use crate::db::models::{Room, RoomCreate, RoomUpdate};
use crate::db::repository::RoomRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/businesses/:business_id/rooms
pub async fn list(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
) -> AppResult<Json<Vec<Room>>> {
    let business = state.settings.get(&business_id).await?;
    let bid = business
        .id
        .ok_or_else(|| AppError::internal("business record missing id"))?;
    let repo = RoomRepository::new(state.db.clone());
    let rooms = repo.find_by_business(&bid).await?;
    Ok(Json(rooms))
}

/// POST /api/businesses/:business_id/rooms
pub async fn create(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    let business = state.settings.get(&business_id).await?;
    if business.kind != BusinessKind::Hotel {
        return Err(AppError::invalid_request(
            "Only hotel businesses carry room inventory",
        ));
    }
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if payload.capacity == 0 {
        return Err(AppError::validation("Room capacity must be at least 1"));
    }
    if payload.nightly_rate < 0.0 {
        return Err(AppError::validation("Nightly rate must not be negative"));
    }

    let bid = business
        .id
        .ok_or_else(|| AppError::internal("business record missing id"))?;
    let repo = RoomRepository::new(state.db.clone());
    let room = repo.create(bid, payload).await?;
    Ok(Json(room))
}

/// GET /api/rooms/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.db.clone());
    let room = repo.find_by_id(&id).await?;
    Ok(Json(room))
}

/// PUT /api/rooms/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomUpdate>,
) -> AppResult<Json<Room>> {
    if let Some(name) = payload.name.as_deref() {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if payload.capacity == Some(0) {
        return Err(AppError::validation("Room capacity must be at least 1"));
    }
    let repo = RoomRepository::new(state.db.clone());
    let room = repo.update(&id, payload).await?;
    Ok(Json(room))
}

/// DELETE /api/rooms/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.db.clone());
    let room = repo.delete(&id).await?;
    Ok(Json(room))
}
