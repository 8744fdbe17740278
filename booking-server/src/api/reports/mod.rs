//! Reporting API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/businesses/{business_id}/reports/summary",
            get(handler::summary),
        )
        .route(
            "/api/businesses/{business_id}/reports/heatmap",
            get(handler::heatmap),
        )
}
