//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::ErrorCode;

use crate::core::ServerState;
use crate::db::models::Invoice;
use crate::db::repository::InvoiceRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/businesses/:business_id/invoices
pub async fn list(
    State(state): State<ServerState>,
    Path(business_id): Path<String>,
) -> AppResult<Json<Vec<Invoice>>> {
    let business = state.settings.get(&business_id).await?;
    let bid = business
        .id
        .ok_or_else(|| AppError::internal("business record missing id"))?;
    let invoices = state.invoices.list_for_business(&bid).await?;
    Ok(Json(invoices))
}

/// GET /api/invoices/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Invoice>> {
    let repo = InvoiceRepository::new(state.db.clone());
    let invoice = repo.find_by_id(&id).await.map_err(|err| match err {
        crate::db::repository::RepoError::NotFound(_) => {
            AppError::with_message(ErrorCode::InvoiceNotFound, format!("Invoice {} not found", id))
        }
        other => other.into(),
    })?;
    Ok(Json(invoice))
}

/// GET /api/reservations/:id/invoice
pub async fn get_by_reservation(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Invoice>> {
    let reservation = state.lifecycle.find(&id).await?;
    let rid = reservation
        .id
        .ok_or_else(|| AppError::internal("reservation record missing id"))?;
    let invoice = state
        .invoices
        .find_by_reservation(&rid)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InvoiceNotFound,
                format!("No invoice for reservation {}", id),
            )
        })?;
    Ok(Json(invoice))
}
