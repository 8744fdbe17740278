//! Outbound notifications
//!
//! Lifecycle events are pushed to an operator-configured webhook.
//! Delivery is strictly best-effort: a failed or slow endpoint must
//! never fail or delay the booking it describes, so posts run on a
//! detached task.

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use crate::db::models::Reservation;

/// Lifecycle event pushed to the webhook
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingEvent {
    Created,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Serialize)]
struct WebhookPayload {
    event: BookingEvent,
    reservation_id: String,
    business_id: String,
    status: shared::ReservationStatus,
    total_amount: f64,
    customer_email: String,
}

pub trait Notifier: Send + Sync {
    /// Fire-and-forget delivery of a lifecycle event
    fn notify(&self, event: BookingEvent, reservation: &Reservation);
}

/// Notifier for configurations without a webhook
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: BookingEvent, _reservation: &Reservation) {}
}

/// Posts lifecycle events as JSON to a configured URL
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_default();
        Self { url, client }
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, event: BookingEvent, reservation: &Reservation) {
        let payload = WebhookPayload {
            event,
            reservation_id: reservation
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            business_id: reservation.business_id.to_string(),
            status: reservation.status,
            total_amount: reservation.total_amount,
            customer_email: reservation.customer.email.clone(),
        };
        let url = self.url.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            if let Err(err) = client.post(&url).json(&payload).send().await {
                warn!(%url, error = %err, "webhook delivery failed");
            }
        });
    }
}
