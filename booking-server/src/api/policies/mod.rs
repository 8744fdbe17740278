//! Cancellation policy API module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/businesses/{business_id}/cancellation-rules",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/cancellation-rules/{id}",
            delete(handler::delete),
        )
}
