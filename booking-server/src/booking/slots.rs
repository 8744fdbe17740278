//! Slot generation
//!
//! Pure function of the settings block and a date. For each operating
//! window, slots start at `open` and advance by the slot duration while
//! strictly before `close`; the close time itself is never a slot, and
//! a window too short to hold one full slot offers nothing. The same
//! inputs always produce the same list.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::db::models::BusinessSettings;

/// All slot start times offered on `date`, in window order.
///
/// Returns an empty list when the date falls in a closure period or on
/// a weekday the business does not open.
pub fn slots_for(date: NaiveDate, settings: &BusinessSettings) -> Vec<NaiveTime> {
    if settings.is_closed_on(date) || !settings.is_weekday_open(date) {
        return Vec::new();
    }

    let step = Duration::minutes(i64::from(settings.slot_duration_minutes));
    let mut slots = Vec::new();
    for window in &settings.operating_windows {
        // a window that cannot hold a single full slot offers nothing
        if window.close.signed_duration_since(window.open) < step {
            continue;
        }
        let mut cursor = window.open;
        while cursor < window.close {
            slots.push(cursor);
            // a non-zero wrap means the addition passed midnight,
            // which is also past any valid close
            match cursor.overflowing_add_signed(step) {
                (next, 0) => cursor = next,
                _ => break,
            }
        }
    }
    slots
}

/// Whether `time` is one of the offered slot starts on `date`
pub fn is_offered(date: NaiveDate, time: NaiveTime, settings: &BusinessSettings) -> bool {
    slots_for(date, settings).contains(&time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{DatePeriod, OperatingWindow, Weekday};

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn window(open: NaiveTime, close: NaiveTime) -> OperatingWindow {
        OperatingWindow {
            open,
            close,
            tariff: None,
        }
    }

    fn settings_with_windows(windows: Vec<OperatingWindow>, duration: u32) -> BusinessSettings {
        let mut settings = BusinessSettings::default();
        settings.operating_windows = windows;
        settings.slot_duration_minutes = duration;
        settings
    }

    #[test]
    fn test_slots_exclude_close_time() {
        // 09:00-12:00 at 60 minutes: 09:00, 10:00, 11:00 but not 12:00
        let settings = settings_with_windows(vec![window(time(9, 0), time(12, 0))], 60);
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(
            slots_for(date, &settings),
            vec![time(9, 0), time(10, 0), time(11, 0)]
        );
    }

    #[test]
    fn test_slots_multiple_windows_in_order() {
        let settings = settings_with_windows(
            vec![
                window(time(9, 0), time(10, 30)),
                window(time(19, 0), time(20, 0)),
            ],
            30,
        );
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(
            slots_for(date, &settings),
            vec![
                time(9, 0),
                time(9, 30),
                time(10, 0),
                time(19, 0),
                time(19, 30),
            ]
        );
    }

    #[test]
    fn test_slots_uneven_final_step() {
        // 09:00-10:15 at 30 minutes: the 10:00 slot starts before close
        // even though it would run past it
        let settings = settings_with_windows(vec![window(time(9, 0), time(10, 15))], 30);
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(
            slots_for(date, &settings),
            vec![time(9, 0), time(9, 30), time(10, 0)]
        );
    }

    #[test]
    fn test_window_shorter_than_slot_emits_nothing() {
        // 09:00-09:15 cannot hold a 30-minute slot, not even 09:00
        let settings = settings_with_windows(vec![window(time(9, 0), time(9, 15))], 30);
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert!(slots_for(date, &settings).is_empty());
    }

    #[test]
    fn test_short_window_skipped_among_longer_ones() {
        let settings = settings_with_windows(
            vec![
                window(time(9, 0), time(10, 0)),
                window(time(12, 0), time(12, 20)),
                window(time(19, 0), time(19, 30)),
            ],
            30,
        );
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert_eq!(
            slots_for(date, &settings),
            vec![time(9, 0), time(9, 30), time(19, 0)]
        );
    }

    #[test]
    fn test_slots_deterministic() {
        let settings = settings_with_windows(
            vec![
                window(time(8, 0), time(14, 0)),
                window(time(18, 0), time(23, 30)),
            ],
            45,
        );
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let first = slots_for(date, &settings);
        for _ in 0..10 {
            assert_eq!(slots_for(date, &settings), first);
        }
    }

    #[test]
    fn test_closure_period_yields_no_slots() {
        let mut settings = settings_with_windows(vec![window(time(9, 0), time(12, 0))], 30);
        settings.closure_periods = vec![DatePeriod {
            start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(),
        }];
        assert!(slots_for(NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(), &settings).is_empty());
        assert!(!slots_for(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(), &settings).is_empty());
    }

    #[test]
    fn test_open_days_filter() {
        let mut settings = settings_with_windows(vec![window(time(9, 0), time(12, 0))], 30);
        settings.open_days = vec![Weekday::Saturday, Weekday::Sunday];
        // 2024-07-01 is a Monday, 2024-07-06 a Saturday
        assert!(slots_for(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), &settings).is_empty());
        assert!(!slots_for(NaiveDate::from_ymd_opt(2024, 7, 6).unwrap(), &settings).is_empty());
    }

    #[test]
    fn test_no_windows_no_slots() {
        let settings = BusinessSettings::default();
        assert!(slots_for(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), &settings).is_empty());
    }

    #[test]
    fn test_is_offered() {
        let settings = settings_with_windows(vec![window(time(19, 0), time(22, 0))], 30);
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert!(is_offered(date, time(19, 30), &settings));
        assert!(!is_offered(date, time(19, 15), &settings));
        assert!(!is_offered(date, time(22, 0), &settings));
    }
}
