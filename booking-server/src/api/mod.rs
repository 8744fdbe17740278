//! API route module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`businesses`] - business profiles, settings, approval
//! - [`rooms`] - hotel room inventory
//! - [`availability`] - slot and room availability views
//! - [`reservations`] - booking lifecycle
//! - [`policies`] - cancellation rules
//! - [`invoices`] - invoice lookups
//! - [`reports`] - occupancy summaries and heatmap

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod availability;
pub mod businesses;
pub mod health;
pub mod invoices;
pub mod policies;
pub mod reports;
pub mod reservations;
pub mod rooms;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(businesses::router())
        .merge(rooms::router())
        .merge(availability::router())
        .merge(reservations::router())
        .merge(policies::router())
        .merge(invoices::router())
        .merge(reports::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    let cors = if state.config.cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        match state.config.cors_origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => CorsLayer::permissive(),
        }
    };

    let request_id = HeaderName::from_static("x-request-id");

    build_router()
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), XRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(cors),
        )
        .with_state(state)
}
