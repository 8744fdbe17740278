//! Capacity ledger
//!
//! Derives occupancy from the reservation table instead of keeping
//! counters: a slot's load is the sum of party sizes of pending and
//! confirmed reservations at that time. A read failure propagates as
//! an error, so admission fails closed rather than admitting blind.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use surrealdb::RecordId;

use shared::AppResult;

use crate::db::repository::ReservationRepository;

/// Load held against one slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupancy {
    /// Number of reservations
    pub count: u32,
    /// Total guests across those reservations
    pub party_total: u32,
    /// Whether any holder booked the slot exclusively
    pub exclusive: bool,
}

/// Half-open range intersection: `[a, b)` and `[c, d)` overlap iff
/// `a < d && c < b`. Touching endpoints (checkout day = check-in day)
/// do not overlap.
pub fn ranges_overlap(a: NaiveDate, b: NaiveDate, c: NaiveDate, d: NaiveDate) -> bool {
    a < d && c < b
}

pub struct CapacityLedger {
    reservations: Arc<ReservationRepository>,
}

impl CapacityLedger {
    pub fn new(reservations: Arc<ReservationRepository>) -> Self {
        Self { reservations }
    }

    /// Occupancy per slot for one business day, counting only
    /// reservations that still hold capacity.
    pub async fn occupancy_by_slot(
        &self,
        business_id: &RecordId,
        date: NaiveDate,
    ) -> AppResult<HashMap<NaiveTime, Occupancy>> {
        let reservations = self.reservations.find_for_date(business_id, date).await?;
        let mut by_slot: HashMap<NaiveTime, Occupancy> = HashMap::new();
        for reservation in &reservations {
            let Some(time) = reservation.time else {
                continue;
            };
            let entry = by_slot.entry(time).or_default();
            entry.count += 1;
            entry.party_total += reservation.party_total();
            entry.exclusive |= reservation.exclusive;
        }
        Ok(by_slot)
    }

    /// Occupancy for a single slot
    pub async fn occupancy_at(
        &self,
        business_id: &RecordId,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<Occupancy> {
        let by_slot = self.occupancy_by_slot(business_id, date).await?;
        Ok(by_slot.get(&time).copied().unwrap_or_default())
    }

    /// Room IDs with a stay intersecting `[check_in, check_out)`.
    /// Stays without an assigned room hold no specific room and are
    /// skipped here.
    pub async fn rooms_taken(
        &self,
        business_id: &RecordId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> AppResult<Vec<RecordId>> {
        let overlapping = self
            .reservations
            .find_overlapping(business_id, check_in, check_out, None)
            .await?;
        Ok(overlapping
            .into_iter()
            .filter_map(|r| r.room_id)
            .collect())
    }

    /// Whether a specific room has any conflicting stay
    pub async fn room_conflicts(
        &self,
        business_id: &RecordId,
        room_id: &RecordId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> AppResult<bool> {
        let overlapping = self
            .reservations
            .find_overlapping(business_id, check_in, check_out, Some(room_id))
            .await?;
        Ok(!overlapping.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overlap_basic() {
        // [1, 5) vs [3, 8)
        assert!(ranges_overlap(
            date(2024, 7, 1),
            date(2024, 7, 5),
            date(2024, 7, 3),
            date(2024, 7, 8),
        ));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        // checkout on the 5th, check-in on the 5th: same-day turnover
        assert!(!ranges_overlap(
            date(2024, 7, 1),
            date(2024, 7, 5),
            date(2024, 7, 5),
            date(2024, 7, 9),
        ));
        assert!(!ranges_overlap(
            date(2024, 7, 5),
            date(2024, 7, 9),
            date(2024, 7, 1),
            date(2024, 7, 5),
        ));
    }

    #[test]
    fn test_containment_overlaps() {
        assert!(ranges_overlap(
            date(2024, 7, 1),
            date(2024, 7, 10),
            date(2024, 7, 3),
            date(2024, 7, 4),
        ));
    }

    #[test]
    fn test_overlap_symmetric() {
        let cases = [
            (date(2024, 7, 1), date(2024, 7, 5), date(2024, 7, 3), date(2024, 7, 8)),
            (date(2024, 7, 1), date(2024, 7, 5), date(2024, 7, 5), date(2024, 7, 9)),
            (date(2024, 7, 1), date(2024, 7, 10), date(2024, 7, 3), date(2024, 7, 4)),
            (date(2024, 7, 1), date(2024, 7, 2), date(2024, 7, 8), date(2024, 7, 9)),
        ];
        for (a, b, c, d) in cases {
            assert_eq!(ranges_overlap(a, b, c, d), ranges_overlap(c, d, a, b));
        }
    }

    #[test]
    fn test_disjoint_ranges() {
        assert!(!ranges_overlap(
            date(2024, 7, 1),
            date(2024, 7, 3),
            date(2024, 7, 10),
            date(2024, 7, 12),
        ));
    }
}
