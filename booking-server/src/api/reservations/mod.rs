//! Reservation API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/businesses/{business_id}/reservations",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/reservations/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/api/reservations/{id}/confirm", post(handler::confirm))
        .route("/api/reservations/{id}/cancel", post(handler::cancel))
}
