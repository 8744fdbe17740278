//! Invoice API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/businesses/{business_id}/invoices",
            get(handler::list),
        )
        .route("/api/invoices/{id}", get(handler::get_by_id))
        .route(
            "/api/reservations/{id}/invoice",
            get(handler::get_by_reservation),
        )
}
