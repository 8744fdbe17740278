//! Cancellation policy API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::booking::policy::validate_rule;
use crate::core::ServerState;
use crate::db::models::{CancellationRule, CancellationRuleCreate};
use crate::db::repository::PolicyRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/businesses/:business_id/cancellation-rules
pub async fn list(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
) -> AppResult<Json<Vec<CancellationRule>>> {
    let business = state.settings.get(&business_id).await?;
    let bid = business
        .id
        .ok_or_else(|| AppError::internal("business record missing id"))?;
    let repo = PolicyRepository::new(state.db.clone());
    let rules = repo.find_by_business(&bid).await?;
    Ok(Json(rules))
}

/// POST /api/businesses/:business_id/cancellation-rules
pub async fn create(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
    Json(payload): Json<CancellationRuleCreate>,
) -> AppResult<Json<CancellationRule>> {
    validate_rule(&payload)?;
    let business = state.settings.get(&business_id).await?;
    let bid = business
        .id
        .ok_or_else(|| AppError::internal("business record missing id"))?;
    let repo = PolicyRepository::new(state.db.clone());
    let rule = repo.create(bid, payload).await?;
    Ok(Json(rule))
}

/// DELETE /api/cancellation-rules/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CancellationRule>> {
    let repo = PolicyRepository::new(state.db.clone());
    let rule = repo.delete(&id).await?;
    Ok(Json(rule))
}
