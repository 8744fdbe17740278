//! Pricing
//!
//! Totals are always computed server-side from the settings and the
//! room inventory; a client-supplied amount is never trusted.

use chrono::{NaiveDate, NaiveTime};

use shared::{AppError, AppResult};

use crate::db::models::{BusinessSettings, Room};
use crate::utils::time::{minute_of_day, nights_between};

use super::money;

/// Per-guest tariff in effect at a slot time: the first operating
/// window containing the time (half-open on minutes) with a positive
/// tariff wins, otherwise the default tariff applies.
pub fn tariff_at(settings: &BusinessSettings, time: NaiveTime) -> f64 {
    let minute = minute_of_day(time);
    for window in &settings.operating_windows {
        if minute >= minute_of_day(window.open) && minute < minute_of_day(window.close) {
            if let Some(tariff) = window.tariff {
                if tariff > 0.0 {
                    return tariff;
                }
            }
        }
    }
    settings.default_tariff
}

/// Total for a slot booking
pub fn slot_total(
    settings: &BusinessSettings,
    time: NaiveTime,
    party_size: u32,
    exclusive: bool,
) -> f64 {
    let per_guest = if exclusive {
        settings.exclusive_tariff
    } else {
        tariff_at(settings, time)
    };
    money::multiply(per_guest, party_size)
}

/// Total for a hotel stay: nights × the room's nightly rate
pub fn stay_total(room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> AppResult<f64> {
    let nights = nights_between(check_in, check_out);
    if nights <= 0 {
        return Err(AppError::validation(format!(
            "Stay from {} to {} has no nights",
            check_in, check_out
        )));
    }
    Ok(money::multiply(room.nightly_rate, nights as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::OperatingWindow;
    use shared::RoomStatus;
    use surrealdb::RecordId;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn settings_with(windows: Vec<OperatingWindow>) -> BusinessSettings {
        let mut settings = BusinessSettings::default();
        settings.operating_windows = windows;
        settings
    }

    #[test]
    fn test_window_tariff_applies() {
        let settings = settings_with(vec![OperatingWindow {
            open: time(9, 0),
            close: time(12, 0),
            tariff: Some(50.0),
        }]);
        // morning booking for three guests at the window tariff
        assert_eq!(slot_total(&settings, time(9, 0), 3, false), 150.0);
    }

    #[test]
    fn test_default_tariff_outside_windows() {
        let settings = settings_with(vec![OperatingWindow {
            open: time(9, 0),
            close: time(12, 0),
            tariff: Some(50.0),
        }]);
        // 12:00 is past the half-open close, so the 75 default applies
        assert_eq!(slot_total(&settings, time(12, 0), 2, false), 150.0);
    }

    #[test]
    fn test_zero_tariff_falls_back_to_default() {
        let settings = settings_with(vec![OperatingWindow {
            open: time(9, 0),
            close: time(12, 0),
            tariff: Some(0.0),
        }]);
        assert_eq!(tariff_at(&settings, time(10, 0)), 75.0);
    }

    #[test]
    fn test_missing_tariff_falls_back_to_default() {
        let settings = settings_with(vec![OperatingWindow {
            open: time(19, 0),
            close: time(23, 0),
            tariff: None,
        }]);
        assert_eq!(slot_total(&settings, time(20, 0), 4, false), 300.0);
    }

    #[test]
    fn test_first_matching_window_wins() {
        let settings = settings_with(vec![
            OperatingWindow {
                open: time(9, 0),
                close: time(14, 0),
                tariff: Some(60.0),
            },
            OperatingWindow {
                open: time(12, 0),
                close: time(18, 0),
                tariff: Some(90.0),
            },
        ]);
        assert_eq!(tariff_at(&settings, time(13, 0)), 60.0);
    }

    #[test]
    fn test_exclusive_uses_exclusive_tariff() {
        let settings = settings_with(vec![OperatingWindow {
            open: time(9, 0),
            close: time(12, 0),
            tariff: Some(50.0),
        }]);
        // 100 per guest regardless of the window tariff
        assert_eq!(slot_total(&settings, time(9, 0), 5, true), 500.0);
    }

    fn room(nightly_rate: f64) -> Room {
        Room {
            id: Some(RecordId::from(("room", "r1"))),
            business_id: RecordId::from(("business", "b1")),
            name: "101".to_string(),
            capacity: 2,
            nightly_rate,
            active: true,
            status: RoomStatus::Available,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_stay_total() {
        let room = room(120.0);
        let check_in = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
        assert_eq!(stay_total(&room, check_in, check_out).unwrap(), 480.0);
    }

    #[test]
    fn test_stay_total_rejects_empty_range() {
        let room = room(120.0);
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert!(stay_total(&room, day, day).is_err());
    }
}
