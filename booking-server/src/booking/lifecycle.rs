//! Reservation lifecycle
//!
//! Create, confirm, cancel, update, delete. Admission runs under the
//! slot lock so the occupancy read and the insert are atomic with
//! respect to competing bookings for the same slot.

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use surrealdb::RecordId;
use tracing::{info, warn};
use validator::Validate;

use shared::request::{BookingDetails, CancelBookingRequest, CreateBookingRequest};
use shared::response::CancellationOutcome;
use shared::{
    AppError, AppResult, BusinessKind, CancelInitiator, ErrorCode, PaymentStatus,
    ReservationStatus,
};

use crate::db::models::{
    BusinessProfile, Reservation, ReservationFilter, ReservationUpdate,
};
use crate::db::repository::ReservationRepository;
use crate::services::notification::{BookingEvent, Notifier};
use crate::services::{InvoiceService, PaymentService};
use crate::utils::time::{days_until, parse_time};

use super::availability::{effective_capacity, AvailabilityEngine};
use super::ledger::CapacityLedger;
use super::locks::SlotLocks;
use super::settings::SettingsResolver;
use super::{money, policy, pricing};

use crate::db::repository::PolicyRepository;

pub struct ReservationLifecycle {
    settings: Arc<SettingsResolver>,
    engine: Arc<AvailabilityEngine>,
    ledger: Arc<CapacityLedger>,
    locks: Arc<SlotLocks>,
    reservations: Arc<ReservationRepository>,
    policies: Arc<PolicyRepository>,
    payments: Arc<PaymentService>,
    invoices: Arc<InvoiceService>,
    notifier: Arc<dyn Notifier>,
}

impl ReservationLifecycle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: Arc<SettingsResolver>,
        engine: Arc<AvailabilityEngine>,
        ledger: Arc<CapacityLedger>,
        locks: Arc<SlotLocks>,
        reservations: Arc<ReservationRepository>,
        policies: Arc<PolicyRepository>,
        payments: Arc<PaymentService>,
        invoices: Arc<InvoiceService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings,
            engine,
            ledger,
            locks,
            reservations,
            policies,
            payments,
            invoices,
            notifier,
        }
    }

    /// Create a booking: admission check and insert under the slot
    /// lock, then a pending payment record.
    pub async fn create(
        &self,
        business_id: &str,
        request: CreateBookingRequest,
    ) -> AppResult<Reservation> {
        request
            .customer
            .validate()
            .map_err(|err| AppError::validation(err.to_string()))?;

        let business = self.settings.get_active(business_id).await?;
        let bid = business
            .id
            .clone()
            .ok_or_else(|| AppError::internal("business record missing id"))?;

        let requested_kind = match &request.details {
            BookingDetails::Restaurant(_) => BusinessKind::Restaurant,
            BookingDetails::Salon(_) => BusinessKind::Salon,
            BookingDetails::Hotel(_) => BusinessKind::Hotel,
        };
        if requested_kind != business.kind {
            return Err(AppError::validation(format!(
                "This business takes {:?} bookings",
                business.kind
            )));
        }

        let reservation = match &request.details {
            BookingDetails::Restaurant(slot) | BookingDetails::Salon(slot) => {
                slot.validate()
                    .map_err(|err| AppError::validation(err.to_string()))?;
                let time = parse_time(&slot.time)?;

                let key = SlotLocks::slot_key(&bid.to_string(), slot.date, time);
                let _guard = self.locks.acquire(&key).await;

                self.engine
                    .check_slot(&business, &bid, slot.date, time, slot.party_size, slot.exclusive)
                    .await?;

                let total =
                    pricing::slot_total(&business.settings, time, slot.party_size, slot.exclusive);

                self.reservations
                    .insert(Reservation {
                        id: None,
                        business_id: bid.clone(),
                        kind: business.kind,
                        customer: request.customer.clone(),
                        date: Some(slot.date),
                        time: Some(time),
                        party_size: Some(slot.party_size),
                        exclusive: slot.exclusive,
                        check_in: None,
                        check_out: None,
                        guests: None,
                        room_id: None,
                        total_amount: total,
                        status: ReservationStatus::Pending,
                        payment_status: PaymentStatus::Pending,
                        source: request.source,
                        notes: request.notes.clone(),
                        special_requests: request.special_requests.clone(),
                        created_at: None,
                        updated_at: None,
                    })
                    .await?
            }
            BookingDetails::Hotel(stay) => {
                stay.validate()
                    .map_err(|err| AppError::validation(err.to_string()))?;

                let key = SlotLocks::stay_key(&bid.to_string());
                let _guard = self.locks.acquire(&key).await;

                let room = self
                    .engine
                    .check_stay(
                        &business,
                        &bid,
                        stay.check_in,
                        stay.check_out,
                        stay.guests,
                        stay.room_id.as_deref(),
                    )
                    .await?;
                let total = pricing::stay_total(&room, stay.check_in, stay.check_out)?;

                self.reservations
                    .insert(Reservation {
                        id: None,
                        business_id: bid.clone(),
                        kind: business.kind,
                        customer: request.customer.clone(),
                        date: None,
                        time: None,
                        party_size: None,
                        exclusive: false,
                        check_in: Some(stay.check_in),
                        check_out: Some(stay.check_out),
                        guests: Some(stay.guests),
                        room_id: room.id.clone(),
                        total_amount: total,
                        status: ReservationStatus::Pending,
                        payment_status: PaymentStatus::Pending,
                        source: request.source,
                        notes: request.notes.clone(),
                        special_requests: request.special_requests.clone(),
                        created_at: None,
                        updated_at: None,
                    })
                    .await?
            }
        };

        let rid = reservation
            .id
            .clone()
            .ok_or_else(|| AppError::internal("reservation record missing id"))?;
        self.payments.open(rid, reservation.total_amount).await?;

        info!(
            reservation_id = %reservation.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            business_id = %bid,
            total = reservation.total_amount,
            "reservation created"
        );
        self.notifier.notify(BookingEvent::Created, &reservation);
        Ok(reservation)
    }

    /// Confirm a pending booking: capture the payment, flip the
    /// status, issue the invoice. Confirming an already confirmed
    /// booking is a no-op that returns the existing state; the unique
    /// invoice index guarantees at most one invoice either way.
    pub async fn confirm(&self, reservation_id: &str) -> AppResult<Reservation> {
        let reservation = self.find(reservation_id).await?;
        let business = self
            .settings
            .get(&record_key(&reservation.business_id))
            .await?;

        match reservation.status {
            ReservationStatus::Cancelled => {
                return Err(AppError::with_message(
                    ErrorCode::ReservationAlreadyCancelled,
                    format!("Reservation {} was cancelled", reservation_id),
                ));
            }
            ReservationStatus::Confirmed => {
                if let Err(err) = self.invoices.issue(&reservation, &business).await {
                    warn!(reservation_id, error = %err, "invoice issue failed on repeat confirm");
                }
                return Ok(reservation);
            }
            ReservationStatus::Pending => {}
            other => {
                return Err(AppError::with_message(
                    ErrorCode::ReservationAlreadyConfirmed,
                    format!("Reservation {} is {:?} and cannot be confirmed", reservation_id, other),
                ));
            }
        }

        let rid = reservation
            .id
            .clone()
            .ok_or_else(|| AppError::internal("reservation record missing id"))?;
        self.payments.capture(&rid).await?;

        let confirmed = self
            .reservations
            .update_status(
                reservation_id,
                ReservationStatus::Confirmed,
                Some(PaymentStatus::Paid),
            )
            .await?;

        // The booking is confirmed and paid at this point; a failed
        // invoice write is logged and retried on the next confirm call
        // rather than rolling the confirmation back.
        if let Err(err) = self.invoices.issue(&confirmed, &business).await {
            warn!(reservation_id, error = %err, "invoice issue failed");
        }

        info!(reservation_id, "reservation confirmed");
        self.notifier.notify(BookingEvent::Confirmed, &confirmed);
        Ok(confirmed)
    }

    /// Cancel a booking. Unpaid pending bookings are removed outright;
    /// paid bookings get a refund per the cancellation policy
    /// (business-initiated cancellations always refund in full).
    pub async fn cancel(
        &self,
        reservation_id: &str,
        request: CancelBookingRequest,
    ) -> AppResult<CancellationOutcome> {
        let reservation = self.find(reservation_id).await?;
        let business = self
            .settings
            .get(&record_key(&reservation.business_id))
            .await?;

        match reservation.status {
            ReservationStatus::Cancelled => {
                return Err(AppError::with_message(
                    ErrorCode::ReservationAlreadyCancelled,
                    format!("Reservation {} is already cancelled", reservation_id),
                ));
            }
            ReservationStatus::Pending | ReservationStatus::Confirmed => {}
            other => {
                return Err(AppError::with_message(
                    ErrorCode::ReservationNotCancellable,
                    format!("Reservation {} is {:?} and cannot be cancelled", reservation_id, other),
                ));
            }
        }

        let rid = reservation
            .id
            .clone()
            .ok_or_else(|| AppError::internal("reservation record missing id"))?;

        let start = reservation
            .start_date()
            .ok_or_else(|| AppError::internal("reservation has no start date"))?;
        let days_before = days_until(start);

        // Unpaid pending bookings never reached the ledger of money;
        // drop them without refund arithmetic.
        if reservation.status == ReservationStatus::Pending
            && reservation.payment_status == PaymentStatus::Pending
        {
            self.payments.purge(&rid).await?;
            self.reservations.delete(reservation_id).await?;
            info!(reservation_id, "unpaid pending reservation removed");
            return Ok(CancellationOutcome {
                reservation_id: reservation_id.to_string(),
                days_before,
                refund_percentage: 0.0,
                refund_amount: 0.0,
                refund_issued: false,
            });
        }

        if request.initiator == CancelInitiator::Customer {
            self.enforce_cancel_lead_time(&reservation, &business)?;
        }

        let refund_percentage = match request.initiator {
            CancelInitiator::Business => 100.0,
            CancelInitiator::Customer => {
                let rules = self
                    .policies
                    .find_by_business(&reservation.business_id)
                    .await?;
                policy::evaluate(&rules, days_before)
            }
        };
        let refund_amount = money::percentage(reservation.total_amount, refund_percentage);

        let mut refund_issued = false;
        if refund_amount > 0.0 {
            // the service skips payments that were never captured;
            // only a record that came back refunded counts
            refund_issued = self
                .payments
                .refund(&rid, refund_amount)
                .await?
                .map(|p| p.status == PaymentStatus::Refunded)
                .unwrap_or(false);
        }

        let payment_status = if refund_issued {
            Some(PaymentStatus::Refunded)
        } else {
            None
        };
        let cancelled = self
            .reservations
            .update_status(reservation_id, ReservationStatus::Cancelled, payment_status)
            .await?;

        info!(
            reservation_id,
            days_before,
            refund_percentage,
            refund_amount,
            reason = request.reason.as_deref().unwrap_or(""),
            "reservation cancelled"
        );
        self.notifier.notify(BookingEvent::Cancelled, &cancelled);

        Ok(CancellationOutcome {
            reservation_id: reservation_id.to_string(),
            days_before,
            refund_percentage,
            refund_amount,
            refund_issued,
        })
    }

    /// Customer cancellations must respect the minimum lead time
    fn enforce_cancel_lead_time(
        &self,
        reservation: &Reservation,
        business: &BusinessProfile,
    ) -> AppResult<()> {
        let Some(start) = reservation.start_date() else {
            return Ok(());
        };
        let start_time = reservation
            .time
            .unwrap_or(business.settings.check_in_time);
        let starts_at = NaiveDateTime::new(start, start_time);
        let hours_left = (starts_at - Utc::now().naive_utc()).num_hours();
        let minimum = i64::from(business.settings.min_cancel_hours);
        if hours_left < minimum {
            return Err(AppError::with_message(
                ErrorCode::ReservationNotCancellable,
                format!(
                    "Cancellations close {} hours before the booking",
                    minimum
                ),
            ));
        }
        Ok(())
    }

    /// Update booking details. Slot or party changes re-run admission
    /// for the target slot and re-price the booking.
    pub async fn update(
        &self,
        reservation_id: &str,
        update: ReservationUpdate,
    ) -> AppResult<Reservation> {
        let reservation = self.find(reservation_id).await?;

        if !matches!(
            reservation.status,
            ReservationStatus::Pending | ReservationStatus::Confirmed
        ) {
            return Err(AppError::with_message(
                ErrorCode::ReservationNotCancellable,
                format!("Reservation {} can no longer be modified", reservation_id),
            ));
        }

        let reschedule =
            update.date.is_some() || update.time.is_some() || update.party_size.is_some();
        if !reschedule {
            return Ok(self.reservations.update(reservation_id, update).await?);
        }

        if reservation.kind == BusinessKind::Hotel {
            return Err(AppError::invalid_request(
                "Stay bookings cannot be rescheduled in place; cancel and rebook",
            ));
        }

        let business = self
            .settings
            .get(&record_key(&reservation.business_id))
            .await?;
        let bid = reservation.business_id.clone();

        let date = update.date.or(reservation.date).ok_or_else(|| {
            AppError::validation("Booking has no date")
        })?;
        let time = update.time.or(reservation.time).ok_or_else(|| {
            AppError::validation("Booking has no time")
        })?;
        let party_size = update
            .party_size
            .or(reservation.party_size)
            .unwrap_or(1);

        let key = SlotLocks::slot_key(&bid.to_string(), date, time);
        let _guard = self.locks.acquire(&key).await;

        let moved = Some(date) != reservation.date || Some(time) != reservation.time;
        if moved {
            // the reservation holds no capacity at the target slot yet
            self.engine
                .check_slot(&business, &bid, date, time, party_size, reservation.exclusive)
                .await?;
        } else {
            // same slot, new party size: account for the seats this
            // reservation already holds
            let occupancy = self.ledger.occupancy_at(&bid, date, time).await?;
            let held = reservation.party_size.unwrap_or(0);
            if let Some(capacity) = effective_capacity(&business.settings) {
                let others = occupancy.party_total.saturating_sub(held);
                if others + party_size > capacity {
                    return Err(AppError::slot_full(format!(
                        "Slot has {} of {} seats taken by other bookings",
                        others, capacity
                    )));
                }
            }
            if party_size > business.settings.max_party_size {
                return Err(AppError::with_message(
                    ErrorCode::PartyTooLarge,
                    format!(
                        "Party of {} exceeds the maximum of {}",
                        party_size, business.settings.max_party_size
                    ),
                ));
            }
        }

        let mut updated = self.reservations.update(reservation_id, update).await?;

        // re-price from the (possibly new) slot and party
        let total =
            pricing::slot_total(&business.settings, time, party_size, updated.exclusive);
        if !money::amounts_equal(total, updated.total_amount) {
            updated = self.reservations.set_total(reservation_id, total).await?;
        }
        Ok(updated)
    }

    /// Hard delete, cascading to the payment record and invoice
    pub async fn delete(&self, reservation_id: &str) -> AppResult<Reservation> {
        let reservation = self.find(reservation_id).await?;
        let rid = reservation
            .id
            .clone()
            .ok_or_else(|| AppError::internal("reservation record missing id"))?;
        self.payments.purge(&rid).await?;
        self.invoices.purge(&rid).await?;
        let deleted = self.reservations.delete(reservation_id).await?;
        info!(reservation_id, "reservation deleted");
        Ok(deleted)
    }

    pub async fn find(&self, reservation_id: &str) -> AppResult<Reservation> {
        self.reservations
            .find_by_id(reservation_id)
            .await
            .map_err(|err| match err {
                crate::db::repository::RepoError::NotFound(_) => {
                    AppError::reservation_not_found(reservation_id)
                }
                other => other.into(),
            })
    }

    pub async fn list(
        &self,
        business_id: &str,
        filter: ReservationFilter,
    ) -> AppResult<Vec<Reservation>> {
        let business = self.settings.get(business_id).await?;
        let bid = business
            .id
            .ok_or_else(|| AppError::internal("business record missing id"))?;
        Ok(self.reservations.find(&bid, &filter).await?)
    }
}

/// "table:key" form expected by the id parsers
fn record_key(id: &RecordId) -> String {
    id.to_string()
}
