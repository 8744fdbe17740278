//! Business API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::booking::settings::{apply_theoretical_capacity, validate_settings};
use crate::core::ServerState;
use crate::db::models::{BusinessCreate, BusinessProfile, BusinessSettings, BusinessUpdate};
use crate::db::repository::BusinessRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/businesses - list all business profiles
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BusinessProfile>>> {
    let repo = BusinessRepository::new(state.db.clone());
    let businesses = repo.find_all().await?;
    Ok(Json(businesses))
}

/// GET /api/businesses/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<BusinessProfile>> {
    let business = state.settings.get(&id).await?;
    Ok(Json(business))
}

/// POST /api/businesses - register a business (starts inactive)
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<BusinessCreate>,
) -> AppResult<Json<BusinessProfile>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if let Some(settings) = payload.settings.as_mut() {
        apply_theoretical_capacity(settings);
        validate_settings(settings)?;
    }

    let repo = BusinessRepository::new(state.db.clone());
    let business = repo.create(payload).await?;
    Ok(Json(business))
}

/// PUT /api/businesses/:id - partial profile update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(mut payload): Json<BusinessUpdate>,
) -> AppResult<Json<BusinessProfile>> {
    if let Some(name) = payload.name.as_deref() {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(settings) = payload.settings.as_mut() {
        apply_theoretical_capacity(settings);
        validate_settings(settings)?;
    }

    let repo = BusinessRepository::new(state.db.clone());
    let business = repo.update(&id, payload).await?;
    Ok(Json(business))
}

/// PUT /api/businesses/:id/settings - replace the settings block
pub async fn update_settings(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(mut settings): Json<BusinessSettings>,
) -> AppResult<Json<BusinessProfile>> {
    apply_theoretical_capacity(&mut settings);
    validate_settings(&settings)?;

    let repo = BusinessRepository::new(state.db.clone());
    let business = repo
        .update(
            &id,
            BusinessUpdate {
                name: None,
                currency: None,
                timezone: None,
                active: None,
                settings: Some(settings),
                updated_at: None,
            },
        )
        .await?;
    Ok(Json(business))
}

/// POST /api/businesses/:id/approve - open the business for bookings
pub async fn approve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<BusinessProfile>> {
    // a business cannot go live with an unusable settings block
    let business = state.settings.get(&id).await?;
    validate_settings(&business.settings).map_err(|err| {
        AppError::with_message(
            shared::ErrorCode::SettingsIncomplete,
            format!("Cannot approve: {}", err.message),
        )
    })?;

    let repo = BusinessRepository::new(state.db.clone());
    let business = repo.set_active(&id, true).await?;
    Ok(Json(business))
}

/// DELETE /api/businesses/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<BusinessProfile>> {
    let repo = BusinessRepository::new(state.db.clone());
    let business = repo.delete(&id).await?;
    Ok(Json(business))
}
