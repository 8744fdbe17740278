//! Availability API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::BusinessKind;
use shared::response::AvailabilityResult;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Query parameters; which ones are required depends on the business
/// kind, so everything is optional at the wire level.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    // slot businesses
    pub date: Option<NaiveDate>,
    pub party_size: Option<u32>,
    // hotels
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    #[serde(default)]
    pub adults: Option<u32>,
    #[serde(default)]
    pub children: Option<u32>,
}

/// GET /api/businesses/:business_id/availability
pub async fn availability(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResult>> {
    let business = state.settings.get_active(&business_id).await?;
    let bid = business
        .id
        .clone()
        .ok_or_else(|| AppError::internal("business record missing id"))?;

    let result = match business.kind {
        BusinessKind::Restaurant | BusinessKind::Salon => {
            let date = query
                .date
                .ok_or_else(|| AppError::validation("date is required"))?;
            let party_size = query
                .party_size
                .ok_or_else(|| AppError::validation("party_size is required"))?;
            if party_size == 0 {
                return Err(AppError::validation("party_size must be at least 1"));
            }

            let slots = state
                .engine
                .list_slots(&business, &bid, date, party_size)
                .await?;
            match business.kind {
                BusinessKind::Salon => AvailabilityResult::Salon { slots },
                _ => AvailabilityResult::Restaurant { slots },
            }
        }
        BusinessKind::Hotel => {
            let check_in = query
                .check_in
                .ok_or_else(|| AppError::validation("check_in is required"))?;
            let check_out = query
                .check_out
                .ok_or_else(|| AppError::validation("check_out is required"))?;
            let guests = query.adults.unwrap_or(1) + query.children.unwrap_or(0);
            if guests == 0 {
                return Err(AppError::validation("at least one guest is required"));
            }

            let rooms = state
                .engine
                .list_rooms(&business, &bid, check_in, check_out, guests)
                .await?;
            AvailabilityResult::Hotel { rooms }
        }
    };

    Ok(Json(result))
}
