//! Reporting API Handlers
//!
//! Dashboard aggregates over a date range. Fill rate divides confirmed
//! guests by the total seat-slots the business offered over the range,
//! and reports 0 when capacity is unconstrained.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::ReservationStatus;
use shared::response::{HeatmapEntry, OccupancySummary};

use crate::booking::availability::effective_capacity;
use crate::booking::slots;
use crate::core::ServerState;
use crate::db::repository::ReservationRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// GET /api/businesses/:business_id/reports/summary?from=&to=
pub async fn summary(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
    Query(range): Query<RangeQuery>,
) -> AppResult<Json<OccupancySummary>> {
    if range.to < range.from {
        return Err(AppError::validation("to must not be before from"));
    }

    let business = state.settings.get(&business_id).await?;
    let bid = business
        .id
        .clone()
        .ok_or_else(|| AppError::internal("business record missing id"))?;

    let repo = ReservationRepository::new(state.db.clone());
    let reservations = repo.find_in_range(&bid, range.from, range.to).await?;

    let total_reservations = reservations.len() as u64;
    let mut confirmed_party_total: u64 = 0;
    let mut revenue = 0.0;
    for reservation in &reservations {
        if reservation.status == ReservationStatus::Confirmed {
            confirmed_party_total += u64::from(reservation.party_total());
            revenue += reservation.total_amount;
        }
    }

    // Seats offered over the range: per day, slots × effective capacity
    let fill_rate = match effective_capacity(&business.settings) {
        Some(capacity) => {
            let mut offered: u64 = 0;
            let mut day = range.from;
            while day <= range.to {
                let slot_count = slots::slots_for(day, &business.settings).len() as u64;
                offered += slot_count * u64::from(capacity);
                day = match day.succ_opt() {
                    Some(next) => next,
                    None => break,
                };
            }
            if offered > 0 {
                (confirmed_party_total as f64 / offered as f64).min(1.0)
            } else {
                0.0
            }
        }
        None => 0.0,
    };

    Ok(Json(OccupancySummary {
        from: range.from,
        to: range.to,
        total_reservations,
        confirmed_party_total,
        revenue: crate::booking::money::round_amount(revenue),
        fill_rate,
    }))
}

/// GET /api/businesses/:business_id/reports/heatmap?from=&to=
pub async fn heatmap(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
    Query(range): Query<RangeQuery>,
) -> AppResult<Json<Vec<HeatmapEntry>>> {
    if range.to < range.from {
        return Err(AppError::validation("to must not be before from"));
    }

    let business = state.settings.get(&business_id).await?;
    let bid = business
        .id
        .ok_or_else(|| AppError::internal("business record missing id"))?;

    let repo = ReservationRepository::new(state.db.clone());
    let reservations = repo.find_in_range(&bid, range.from, range.to).await?;

    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for reservation in &reservations {
        if let Some(date) = reservation.start_date() {
            *counts.entry(date).or_insert(0) += 1;
        }
    }

    Ok(Json(
        counts
            .into_iter()
            .map(|(date, count)| HeatmapEntry { date, count })
            .collect(),
    ))
}
