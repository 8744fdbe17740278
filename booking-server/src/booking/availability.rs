//! Availability engine
//!
//! Admission checks for slot and stay bookings, plus the read-side
//! availability views. Admission answers "may this booking be taken
//! right now"; the lifecycle layer is responsible for holding the slot
//! lock across the check and the insert.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use surrealdb::RecordId;

use shared::response::{RoomAvailability, SlotAvailability};
use shared::{AppError, AppResult, ErrorCode};

use crate::db::models::{BusinessProfile, BusinessSettings, Room};
use crate::db::repository::RoomRepository;
use crate::utils::time::format_slot;

use super::ledger::CapacityLedger;
use super::slots;

/// Effective per-slot guest ceiling: the minimum over the positive
/// members of (total capacity, theoretical capacity, per-slot limit).
/// `None` means unconstrained.
pub fn effective_capacity(settings: &BusinessSettings) -> Option<u32> {
    [
        settings.total_capacity,
        settings.theoretical_capacity,
        settings.max_per_slot,
    ]
    .into_iter()
    .filter(|&c| c > 0)
    .min()
}

pub struct AvailabilityEngine {
    ledger: Arc<CapacityLedger>,
    rooms: Arc<RoomRepository>,
}

impl AvailabilityEngine {
    pub fn new(ledger: Arc<CapacityLedger>, rooms: Arc<RoomRepository>) -> Self {
        Self { ledger, rooms }
    }

    /// Admission check for a slot booking. Must be called with the
    /// slot lock held, so the occupancy read stays valid until the
    /// reservation is inserted.
    pub async fn check_slot(
        &self,
        business: &BusinessProfile,
        business_id: &RecordId,
        date: NaiveDate,
        time: NaiveTime,
        party_size: u32,
        exclusive: bool,
    ) -> AppResult<()> {
        let settings = &business.settings;

        if !slots::is_offered(date, time, settings) {
            return Err(AppError::out_of_window(format!(
                "No slot at {} on {}",
                format_slot(time),
                date
            )));
        }

        if party_size == 0 {
            return Err(AppError::validation("Party size must be at least 1"));
        }
        if party_size > settings.max_party_size {
            return Err(AppError::with_message(
                ErrorCode::PartyTooLarge,
                format!(
                    "Party of {} exceeds the maximum of {}",
                    party_size, settings.max_party_size
                ),
            ));
        }

        let occupancy = self.ledger.occupancy_at(business_id, date, time).await?;

        if occupancy.exclusive {
            return Err(AppError::slot_full(format!(
                "Slot {} is privately booked",
                format_slot(time)
            )));
        }
        if exclusive && occupancy.count > 0 {
            return Err(AppError::slot_full(format!(
                "Slot {} already has bookings and cannot be privatised",
                format_slot(time)
            )));
        }

        if let Some(capacity) = effective_capacity(settings) {
            if occupancy.party_total + party_size > capacity {
                return Err(AppError::slot_full(format!(
                    "Slot {} has {} of {} seats taken",
                    format_slot(time),
                    occupancy.party_total,
                    capacity
                ))
                .with_detail("requested", party_size)
                .with_detail("occupied", occupancy.party_total)
                .with_detail("capacity", capacity));
            }
        }

        Ok(())
    }

    /// Admission check for a hotel stay. Picks the smallest free room
    /// that fits when no room was requested. Must be called with the
    /// stay lock held.
    pub async fn check_stay(
        &self,
        business: &BusinessProfile,
        business_id: &RecordId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
        room_id: Option<&str>,
    ) -> AppResult<Room> {
        let settings = &business.settings;

        if check_out <= check_in {
            return Err(AppError::with_message(
                ErrorCode::InvalidStayRange,
                format!("Check-out {} must be after check-in {}", check_out, check_in),
            ));
        }
        if guests == 0 {
            return Err(AppError::validation("Guest count must be at least 1"));
        }

        if !settings.opening_periods.is_empty()
            && !settings
                .opening_periods
                .iter()
                .any(|p| p.contains_stay(check_in, check_out))
        {
            return Err(AppError::out_of_window(format!(
                "The stay {} to {} falls outside the opening periods",
                check_in, check_out
            )));
        }

        match room_id {
            Some(room_id) => {
                let room = self.rooms.find_by_id(room_id).await.map_err(|err| match err {
                    crate::db::repository::RepoError::NotFound(_) => AppError::with_message(
                        ErrorCode::RoomNotFound,
                        format!("Room not found: {}", room_id),
                    ),
                    other => other.into(),
                })?;
                if &room.business_id != business_id {
                    return Err(AppError::with_message(
                        ErrorCode::RoomNotFound,
                        format!("Room {} does not belong to this business", room_id),
                    ));
                }
                if !room.is_bookable() {
                    return Err(AppError::with_message(
                        ErrorCode::RoomNotBookable,
                        format!("Room {} is not currently bookable", room.name),
                    ));
                }
                if guests > room.capacity {
                    return Err(AppError::with_message(
                        ErrorCode::PartyTooLarge,
                        format!(
                            "Room {} hosts up to {} guests, {} requested",
                            room.name, room.capacity, guests
                        ),
                    ));
                }
                let rid = room
                    .id
                    .clone()
                    .ok_or_else(|| AppError::internal("room record missing id"))?;
                if self
                    .ledger
                    .room_conflicts(business_id, &rid, check_in, check_out)
                    .await?
                {
                    return Err(AppError::room_unavailable(format!(
                        "Room {} is taken between {} and {}",
                        room.name, check_in, check_out
                    )));
                }
                Ok(room)
            }
            None => {
                let candidates = self.rooms.find_candidates(business_id, guests).await?;
                if candidates.is_empty() {
                    return Err(AppError::with_message(
                        ErrorCode::RoomUnavailable,
                        format!("No room hosts {} guests", guests),
                    ));
                }
                let taken = self
                    .ledger
                    .rooms_taken(business_id, check_in, check_out)
                    .await?;
                candidates
                    .into_iter()
                    .find(|room| {
                        room.id.as_ref().map(|id| !taken.contains(id)).unwrap_or(false)
                    })
                    .ok_or_else(|| {
                        AppError::room_unavailable(format!(
                            "No room free between {} and {}",
                            check_in, check_out
                        ))
                    })
            }
        }
    }

    /// Availability grid for one day: every offered slot with a flag
    /// saying whether a party of `party_size` would still fit.
    pub async fn list_slots(
        &self,
        business: &BusinessProfile,
        business_id: &RecordId,
        date: NaiveDate,
        party_size: u32,
    ) -> AppResult<Vec<SlotAvailability>> {
        let settings = &business.settings;
        let capacity = effective_capacity(settings);
        let occupancy = self.ledger.occupancy_by_slot(business_id, date).await?;

        Ok(slots::slots_for(date, settings)
            .into_iter()
            .map(|time| {
                let load = occupancy.get(&time).copied().unwrap_or_default();
                let available = !load.exclusive
                    && party_size <= settings.max_party_size
                    && capacity
                        .map(|c| load.party_total + party_size <= c)
                        .unwrap_or(true);
                SlotAvailability {
                    time: format_slot(time),
                    available,
                }
            })
            .collect())
    }

    /// Room listing for a stay: every bookable room that fits the
    /// party, flagged free or taken over the range.
    pub async fn list_rooms(
        &self,
        business: &BusinessProfile,
        business_id: &RecordId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: u32,
    ) -> AppResult<Vec<RoomAvailability>> {
        if check_out <= check_in {
            return Err(AppError::with_message(
                ErrorCode::InvalidStayRange,
                format!("Check-out {} must be after check-in {}", check_out, check_in),
            ));
        }

        let in_season = business.settings.opening_periods.is_empty()
            || business
                .settings
                .opening_periods
                .iter()
                .any(|p| p.contains_stay(check_in, check_out));

        let candidates = self.rooms.find_candidates(business_id, guests).await?;
        let taken = self
            .ledger
            .rooms_taken(business_id, check_in, check_out)
            .await?;

        Ok(candidates
            .into_iter()
            .map(|room| {
                let free = in_season
                    && room
                        .id
                        .as_ref()
                        .map(|id| !taken.contains(id))
                        .unwrap_or(false);
                RoomAvailability {
                    room_id: room.id.map(|id| id.to_string()).unwrap_or_default(),
                    name: room.name,
                    capacity: room.capacity,
                    nightly_rate: room.nightly_rate,
                    available: free,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_capacity_three_way_min() {
        let mut settings = BusinessSettings::default();
        settings.total_capacity = 50;
        settings.theoretical_capacity = 40;
        settings.max_per_slot = 30;
        assert_eq!(effective_capacity(&settings), Some(30));
    }

    #[test]
    fn test_effective_capacity_ignores_zeroes() {
        let mut settings = BusinessSettings::default();
        settings.total_capacity = 0;
        settings.theoretical_capacity = 40;
        settings.max_per_slot = 0;
        assert_eq!(effective_capacity(&settings), Some(40));
    }

    #[test]
    fn test_effective_capacity_unconstrained() {
        let settings = BusinessSettings::default();
        assert_eq!(effective_capacity(&settings), None);
    }
}
