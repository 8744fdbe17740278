//! Invoice issuance
//!
//! One invoice per reservation, created when the booking is confirmed.
//! The unique index on `invoice.reservation_id` makes creation
//! idempotent: a second confirm finds the duplicate rejected and
//! returns the invoice already on file.

use std::sync::Arc;

use surrealdb::RecordId;
use tracing::warn;
use uuid::Uuid;

use shared::{AppError, AppResult, BusinessKind};

use crate::db::models::{BusinessProfile, Invoice, InvoiceItem, Reservation};
use crate::db::repository::{InvoiceRepository, RepoError};
use crate::utils::time::{nights_between, now_millis};

pub struct InvoiceService {
    invoices: Arc<InvoiceRepository>,
}

impl InvoiceService {
    pub fn new(invoices: Arc<InvoiceRepository>) -> Self {
        Self { invoices }
    }

    /// Issue the invoice for a confirmed reservation, or return the
    /// existing one if it was already issued.
    pub async fn issue(
        &self,
        reservation: &Reservation,
        business: &BusinessProfile,
    ) -> AppResult<Invoice> {
        let reservation_id = reservation
            .id
            .clone()
            .ok_or_else(|| AppError::internal("reservation record missing id"))?;
        let business_id = reservation.business_id.clone();

        let invoice = Invoice {
            id: None,
            reservation_id: reservation_id.clone(),
            business_id,
            number: format!("INV-{}", Uuid::new_v4().simple()),
            currency: business.currency.clone(),
            items: Self::line_items(reservation),
            total: reservation.total_amount,
            issued_at: now_millis(),
        };

        match self.invoices.create(invoice).await {
            Ok(created) => Ok(created),
            Err(RepoError::Duplicate(_)) => {
                warn!(%reservation_id, "invoice already issued, reusing it");
                self.invoices
                    .find_by_reservation(&reservation_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal("duplicate invoice rejected but none found")
                    })
            }
            Err(other) => Err(other.into()),
        }
    }

    fn line_items(reservation: &Reservation) -> Vec<InvoiceItem> {
        match reservation.kind {
            BusinessKind::Hotel => {
                let nights = match (reservation.check_in, reservation.check_out) {
                    (Some(check_in), Some(check_out)) => {
                        nights_between(check_in, check_out).max(1) as u32
                    }
                    _ => 1,
                };
                let nightly = reservation.total_amount / f64::from(nights);
                vec![InvoiceItem {
                    description: format!("Stay, {} night(s)", nights),
                    unit_price: crate::booking::money::round_amount(nightly),
                    quantity: nights,
                    total: reservation.total_amount,
                }]
            }
            BusinessKind::Restaurant | BusinessKind::Salon => {
                let guests = reservation.party_size.unwrap_or(1).max(1);
                let per_guest = reservation.total_amount / f64::from(guests);
                let description = if reservation.exclusive {
                    format!("Private booking, {} guest(s)", guests)
                } else {
                    format!("Booking, {} guest(s)", guests)
                };
                vec![InvoiceItem {
                    description,
                    unit_price: crate::booking::money::round_amount(per_guest),
                    quantity: guests,
                    total: reservation.total_amount,
                }]
            }
        }
    }

    pub async fn find_by_reservation(
        &self,
        reservation_id: &RecordId,
    ) -> AppResult<Option<Invoice>> {
        Ok(self.invoices.find_by_reservation(reservation_id).await?)
    }

    pub async fn list_for_business(&self, business_id: &RecordId) -> AppResult<Vec<Invoice>> {
        Ok(self.invoices.find_by_business(business_id).await?)
    }

    /// Drop the invoice when a reservation is hard-deleted
    pub async fn purge(&self, reservation_id: &RecordId) -> AppResult<()> {
        self.invoices.delete_for(reservation_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::request::CustomerInfo;
    use shared::{BookingSource, PaymentStatus, ReservationStatus};

    fn base_reservation(kind: BusinessKind) -> Reservation {
        Reservation {
            id: Some(RecordId::from(("reservation", "r1"))),
            business_id: RecordId::from(("business", "b1")),
            kind,
            customer: CustomerInfo {
                name: "Amina".into(),
                email: "amina@example.com".into(),
                phone: None,
            },
            date: None,
            time: None,
            party_size: None,
            exclusive: false,
            check_in: None,
            check_out: None,
            guests: None,
            room_id: None,
            total_amount: 0.0,
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            source: BookingSource::Website,
            notes: None,
            special_requests: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_slot_line_items() {
        let mut reservation = base_reservation(BusinessKind::Restaurant);
        reservation.party_size = Some(4);
        reservation.total_amount = 300.0;

        let items = InvoiceService::line_items(&reservation);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 4);
        assert_eq!(items[0].unit_price, 75.0);
        assert_eq!(items[0].total, 300.0);
    }

    #[test]
    fn test_stay_line_items() {
        let mut reservation = base_reservation(BusinessKind::Hotel);
        reservation.check_in = NaiveDate::from_ymd_opt(2024, 7, 1);
        reservation.check_out = NaiveDate::from_ymd_opt(2024, 7, 4);
        reservation.guests = Some(2);
        reservation.total_amount = 360.0;

        let items = InvoiceService::line_items(&reservation);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(items[0].unit_price, 120.0);
    }

    #[test]
    fn test_exclusive_booking_marked_private() {
        let mut reservation = base_reservation(BusinessKind::Salon);
        reservation.party_size = Some(5);
        reservation.exclusive = true;
        reservation.total_amount = 500.0;

        let items = InvoiceService::line_items(&reservation);
        assert!(items[0].description.starts_with("Private booking"));
    }
}
