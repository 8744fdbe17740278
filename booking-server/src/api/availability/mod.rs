//! Availability API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/businesses/{business_id}/availability",
        get(handler::availability),
    )
}
