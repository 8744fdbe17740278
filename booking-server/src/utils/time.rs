//! Time helpers
//!
//! Dates are carried as `NaiveDate` and slot times as `NaiveTime`
//! throughout; handlers parse wire strings here, the engine only sees
//! typed values.

use chrono::{NaiveDate, NaiveTime, Utc};

use shared::{AppError, AppResult};

/// Current Unix time in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's date (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a slot time string, accepting both HH:MM and HH:MM:SS
pub fn parse_time(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

/// Format a slot time as HH:MM for wire views
pub fn format_slot(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Minute-of-day for half-open window comparisons
pub fn minute_of_day(time: NaiveTime) -> u32 {
    use chrono::Timelike;
    time.hour() * 60 + time.minute()
}

/// Nights in a half-open stay `[check_in, check_out)`
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Whole days of lead time between now and a reserved date
/// (negative when the date is already past)
pub fn days_until(date: NaiveDate) -> i64 {
    (date - today()).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_both_formats() {
        let expected = NaiveTime::from_hms_opt(19, 30, 0).unwrap();
        assert_eq!(parse_time("19:30").unwrap(), expected);
        assert_eq!(parse_time("19:30:00").unwrap(), expected);
        assert!(parse_time("7pm").is_err());
    }

    #[test]
    fn test_format_slot() {
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(format_slot(time), "09:00");
    }

    #[test]
    fn test_minute_of_day() {
        assert_eq!(minute_of_day(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), 0);
        assert_eq!(
            minute_of_day(NaiveTime::from_hms_opt(19, 30, 0).unwrap()),
            1170
        );
    }

    #[test]
    fn test_nights_between() {
        let check_in = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
        assert_eq!(nights_between(check_in, check_out), 4);
        assert_eq!(nights_between(check_in, check_in), 0);
    }
}
