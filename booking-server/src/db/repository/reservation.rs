
use chrono::NaiveDate;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use shared::{PaymentStatus, ReservationStatus};

use crate::db::models::{Reservation, ReservationFilter, ReservationUpdate};
use crate::utils::time::now_millis;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "reservation";

pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn insert(&self, mut reservation: Reservation) -> RepoResult<Reservation> {
        let now = now_millis();
        reservation.id = None;
        reservation.created_at = Some(now);
        reservation.updated_at = Some(now);
        let created: Option<Reservation> =
            self.base.db().create(TABLE).content(reservation).await?;
        created.ok_or_else(|| RepoError::Database("reservation insert returned nothing".into()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Reservation> {
        let rid = self.base.parse_id(id, TABLE)?;
        let reservation: Option<Reservation> = self.base.db().select(rid).await?;
        reservation.ok_or_else(|| RepoError::NotFound(format!("reservation {}", id)))
    }

    pub async fn find(
        &self,
        business_id: &RecordId,
        filter: &ReservationFilter,
    ) -> RepoResult<Vec<Reservation>> {
        let mut sql = String::from("SELECT * FROM reservation WHERE business_id = $business");
        if filter.status.is_some() {
            sql.push_str(" AND status = $status");
        }
        if filter.date.is_some() {
            sql.push_str(" AND (date = $date OR (check_in <= $date AND check_out > $date))");
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("business", business_id.to_string()));
        if let Some(status) = filter.status {
            query = query.bind(("status", status));
        }
        if let Some(date) = filter.date {
            query = query.bind(("date", date.to_string()));
        }
        let mut result = query.await?;
        let reservations: Vec<Reservation> = result.take(0)?;
        Ok(reservations)
    }

    /// Slot reservations on a given date that still hold capacity
    /// (pending or confirmed).
    pub async fn find_for_date(
        &self,
        business_id: &RecordId,
        date: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation \
                 WHERE business_id = $business \
                   AND date = $date \
                   AND status IN ['pending', 'confirmed']",
            )
            .bind(("business", business_id.to_string()))
            .bind(("date", date.to_string()))
            .await?;
        let reservations: Vec<Reservation> = result.take(0)?;
        Ok(reservations)
    }

    /// Stay reservations intersecting the half-open range
    /// `[start, end)`, optionally restricted to one room. Dates are
    /// ISO strings so lexicographic comparison matches chronology.
    pub async fn find_overlapping(
        &self,
        business_id: &RecordId,
        start: NaiveDate,
        end: NaiveDate,
        room_id: Option<&RecordId>,
    ) -> RepoResult<Vec<Reservation>> {
        let mut sql = String::from(
            "SELECT * FROM reservation \
             WHERE business_id = $business \
               AND check_in < $end AND check_out > $start \
               AND status IN ['pending', 'confirmed']",
        );
        if room_id.is_some() {
            sql.push_str(" AND room_id = $room");
        }
        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("business", business_id.to_string()))
            .bind(("start", start.to_string()))
            .bind(("end", end.to_string()));
        if let Some(room) = room_id {
            query = query.bind(("room", room.to_string()));
        }
        let mut result = query.await?;
        let reservations: Vec<Reservation> = result.take(0)?;
        Ok(reservations)
    }

    /// Reservations whose start date falls in `[from, to]`, for
    /// occupancy reports.
    pub async fn find_in_range(
        &self,
        business_id: &RecordId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM reservation \
                 WHERE business_id = $business \
                   AND (\
                     (date != NONE AND date >= $from AND date <= $to) OR \
                     (check_in != NONE AND check_in >= $from AND check_in <= $to)\
                   )",
            )
            .bind(("business", business_id.to_string()))
            .bind(("from", from.to_string()))
            .bind(("to", to.to_string()))
            .await?;
        let reservations: Vec<Reservation> = result.take(0)?;
        Ok(reservations)
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: ReservationStatus,
        payment_status: Option<PaymentStatus>,
    ) -> RepoResult<Reservation> {
        let rid = self.base.parse_id(id, TABLE)?;
        let mut sql =
            String::from("UPDATE $reservation SET status = $status, updated_at = $now");
        if payment_status.is_some() {
            sql.push_str(", payment_status = $payment_status");
        }
        sql.push_str(" RETURN AFTER");

        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("reservation", rid))
            .bind(("status", status))
            .bind(("now", now_millis()));
        if let Some(payment_status) = payment_status {
            query = query.bind(("payment_status", payment_status));
        }
        let mut result = query.await?;
        let updated: Option<Reservation> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("reservation {}", id)))
    }

    pub async fn update(&self, id: &str, mut data: ReservationUpdate) -> RepoResult<Reservation> {
        let rid = self.base.parse_id(id, TABLE)?;
        data.updated_at = Some(now_millis());
        let updated: Option<Reservation> = self.base.db().update(rid).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("reservation {}", id)))
    }

    /// Overwrite the computed total after a reschedule
    pub async fn set_total(&self, id: &str, total: f64) -> RepoResult<Reservation> {
        let rid = self.base.parse_id(id, TABLE)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $reservation SET total_amount = $total, updated_at = $now RETURN AFTER")
            .bind(("reservation", rid))
            .bind(("total", total))
            .bind(("now", now_millis()))
            .await?;
        let updated: Option<Reservation> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("reservation {}", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Reservation> {
        let rid = self.base.parse_id(id, TABLE)?;
        let deleted: Option<Reservation> = self.base.db().delete(rid).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("reservation {}", id)))
    }
}
