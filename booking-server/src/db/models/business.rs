//! Business profile model
//!
//! One document per tenant. The `settings` block drives the whole
//! availability engine: operating windows, slot quantization, capacity
//! ceilings, closures, and tariffs.

use super::serde_helpers;
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::BusinessKind;
use surrealdb::RecordId;

pub type BusinessId = RecordId;

/// Day of week for `open_days`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// One daily operating window `[open, close)` with an optional tariff
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingWindow {
    /// Window start (HH:MM:SS, inclusive)
    pub open: NaiveTime,
    /// Window end (HH:MM:SS, exclusive)
    pub close: NaiveTime,
    /// Per-guest price inside this window; absent or non-positive
    /// values fall back to the default tariff
    pub tariff: Option<f64>,
}

/// Inclusive date range (closures, hotel opening periods)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DatePeriod {
    /// Whether a single date falls inside this period (inclusive bounds)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the half-open stay `[check_in, check_out)` lies fully
    /// inside this period
    pub fn contains_stay(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        // check_out is exclusive, so the last occupied night is check_out - 1
        let last_night = check_out.pred_opt().unwrap_or(check_out);
        self.start <= check_in && last_night <= self.end
    }
}

/// Custom table grouping (size × count)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTableGroup {
    pub size: u32,
    pub count: u32,
}

/// Physical table inventory, the source of theoretical capacity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInventory {
    #[serde(default)]
    pub two_seat: u32,
    #[serde(default)]
    pub four_seat: u32,
    #[serde(default)]
    pub six_seat: u32,
    #[serde(default)]
    pub eight_seat: u32,
    #[serde(default)]
    pub custom: Vec<CustomTableGroup>,
}

impl TableInventory {
    /// Seats implied by the configured tables
    pub fn theoretical_capacity(&self) -> u32 {
        let standard = 2 * self.two_seat + 4 * self.four_seat + 6 * self.six_seat + 8 * self.eight_seat;
        let custom: u32 = self.custom.iter().map(|g| g.size * g.count).sum();
        standard + custom
    }

    /// Whether any table counts were configured at all
    pub fn is_configured(&self) -> bool {
        self.two_seat > 0
            || self.four_seat > 0
            || self.six_seat > 0
            || self.eight_seat > 0
            || !self.custom.is_empty()
    }
}

/// Business configuration block
///
/// Capacity fields use 0 to mean "unconstrained"; the effective per-slot
/// ceiling is the minimum over the positive members of
/// (total_capacity, theoretical_capacity, max_per_slot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessSettings {
    /// Daily operating windows; empty for hotels
    #[serde(default)]
    pub operating_windows: Vec<OperatingWindow>,

    /// Slot length in minutes; must be positive and divisible by 5
    #[serde(default = "default_slot_duration")]
    pub slot_duration_minutes: u32,

    /// Physical ceiling on simultaneous guests; 0 = unconstrained
    #[serde(default)]
    pub total_capacity: u32,

    /// Derived from the table inventory; 0 = not derived
    #[serde(default)]
    pub theoretical_capacity: u32,

    /// Operator-imposed per-slot ceiling; 0 = unconstrained
    #[serde(default)]
    pub max_per_slot: u32,

    /// Dates on which no slots are offered (inclusive ranges)
    #[serde(default)]
    pub closure_periods: Vec<DatePeriod>,

    /// Weekdays on which slots are offered; empty = every day
    #[serde(default)]
    pub open_days: Vec<Weekday>,

    /// Hotel only: the only date ranges in which a stay may occur;
    /// empty = unrestricted
    #[serde(default)]
    pub opening_periods: Vec<DatePeriod>,

    /// Per-guest fallback price when no window tariff applies
    #[serde(default = "default_tariff")]
    pub default_tariff: f64,

    /// Per-guest price for full-venue (privatisation) bookings
    #[serde(default = "default_exclusive_tariff")]
    pub exclusive_tariff: f64,

    /// Largest accepted party size
    #[serde(default = "default_max_party_size")]
    pub max_party_size: u32,

    /// Minimum lead time for customer cancellations, in hours
    #[serde(default = "default_min_cancel_hours")]
    pub min_cancel_hours: u32,

    /// Physical table inventory
    #[serde(default)]
    pub tables: TableInventory,

    /// Hotel check-in time (informational)
    #[serde(default = "default_check_in_time")]
    pub check_in_time: NaiveTime,

    /// Hotel check-out time (informational)
    #[serde(default = "default_check_out_time")]
    pub check_out_time: NaiveTime,
}

fn default_slot_duration() -> u32 {
    30
}

fn default_tariff() -> f64 {
    75.0
}

fn default_exclusive_tariff() -> f64 {
    100.0
}

fn default_max_party_size() -> u32 {
    10
}

fn default_min_cancel_hours() -> u32 {
    2
}

fn default_check_in_time() -> NaiveTime {
    NaiveTime::from_hms_opt(15, 0, 0).unwrap()
}

fn default_check_out_time() -> NaiveTime {
    NaiveTime::from_hms_opt(11, 0, 0).unwrap()
}

impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            operating_windows: Vec::new(),
            slot_duration_minutes: default_slot_duration(),
            total_capacity: 0,
            theoretical_capacity: 0,
            max_per_slot: 0,
            closure_periods: Vec::new(),
            open_days: Vec::new(),
            opening_periods: Vec::new(),
            default_tariff: default_tariff(),
            exclusive_tariff: default_exclusive_tariff(),
            max_party_size: default_max_party_size(),
            min_cancel_hours: default_min_cancel_hours(),
            tables: TableInventory::default(),
            check_in_time: default_check_in_time(),
            check_out_time: default_check_out_time(),
        }
    }
}

impl BusinessSettings {
    /// Whether a date is inside any closure period
    pub fn is_closed_on(&self, date: NaiveDate) -> bool {
        self.closure_periods.iter().any(|p| p.contains(date))
    }

    /// Whether the weekday of a date is in the open-day set
    /// (empty set means open every day)
    pub fn is_weekday_open(&self, date: NaiveDate) -> bool {
        self.open_days.is_empty() || self.open_days.contains(&Weekday::from(date.weekday()))
    }
}

/// Business profile (one document per tenant)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<BusinessId>,

    pub kind: BusinessKind,

    pub name: String,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Approved for bookings; new businesses start inactive
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub active: bool,

    #[serde(default)]
    pub settings: BusinessSettings,

    /// Creation time (Unix millis)
    pub created_at: Option<i64>,

    /// Last update time (Unix millis)
    pub updated_at: Option<i64>,
}

fn default_currency() -> String {
    "MAD".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Create business payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCreate {
    pub kind: BusinessKind,
    pub name: String,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub settings: Option<BusinessSettings>,
}

impl BusinessCreate {
    /// Materialize a full profile; omitted fields take the same
    /// defaults serde would apply. New profiles start inactive.
    pub fn into_profile(self, now: i64) -> BusinessProfile {
        BusinessProfile {
            id: None,
            kind: self.kind,
            name: self.name,
            currency: self.currency.unwrap_or_else(default_currency),
            timezone: self.timezone.unwrap_or_else(default_timezone),
            active: false,
            settings: self.settings.unwrap_or_default(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Update business payload (partial merge)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<BusinessSettings>,
    /// Stamped by the repository on merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theoretical_capacity() {
        let tables = TableInventory {
            two_seat: 3,
            four_seat: 2,
            six_seat: 1,
            eight_seat: 0,
            custom: vec![CustomTableGroup { size: 10, count: 2 }],
        };
        // 6 + 8 + 6 + 0 + 20
        assert_eq!(tables.theoretical_capacity(), 40);
    }

    #[test]
    fn test_table_inventory_unconfigured() {
        let tables = TableInventory::default();
        assert!(!tables.is_configured());
        assert_eq!(tables.theoretical_capacity(), 0);
    }

    #[test]
    fn test_date_period_contains() {
        let period = DatePeriod {
            start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
        };
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 8, 31).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()));
    }

    #[test]
    fn test_date_period_contains_stay() {
        let period = DatePeriod {
            start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
        };
        // Checkout on Sep 1 is fine: the last occupied night is Aug 31
        assert!(period.contains_stay(
            NaiveDate::from_ymd_opt(2024, 8, 28).unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        ));
        assert!(!period.contains_stay(
            NaiveDate::from_ymd_opt(2024, 8, 28).unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        ));
    }

    #[test]
    fn test_weekday_open() {
        let mut settings = BusinessSettings::default();
        let monday = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert!(settings.is_weekday_open(monday));

        settings.open_days = vec![Weekday::Tuesday, Weekday::Wednesday];
        assert!(!settings.is_weekday_open(monday));
        let tuesday = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
        assert!(settings.is_weekday_open(tuesday));
    }

    #[test]
    fn test_settings_defaults() {
        let settings: BusinessSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.slot_duration_minutes, 30);
        assert_eq!(settings.default_tariff, 75.0);
        assert_eq!(settings.exclusive_tariff, 100.0);
        assert_eq!(settings.max_party_size, 10);
        assert_eq!(settings.total_capacity, 0);
    }

    #[test]
    fn test_create_payload_defaults_into_profile() {
        let payload = BusinessCreate {
            kind: BusinessKind::Restaurant,
            name: "Chez Test".to_string(),
            currency: None,
            timezone: None,
            settings: None,
        };
        let profile = payload.into_profile(1_700_000_000_000);
        assert_eq!(profile.currency, "MAD");
        assert_eq!(profile.timezone, "UTC");
        assert!(!profile.active);
        assert_eq!(profile.settings.slot_duration_minutes, 30);
        assert_eq!(profile.created_at, Some(1_700_000_000_000));
    }

    #[test]
    fn test_create_payload_keeps_explicit_fields() {
        let payload = BusinessCreate {
            kind: BusinessKind::Hotel,
            name: "Riad Test".to_string(),
            currency: Some("EUR".to_string()),
            timezone: Some("Europe/Madrid".to_string()),
            settings: Some(BusinessSettings {
                total_capacity: 12,
                ..BusinessSettings::default()
            }),
        };
        let profile = payload.into_profile(0);
        assert_eq!(profile.currency, "EUR");
        assert_eq!(profile.timezone, "Europe/Madrid");
        assert_eq!(profile.settings.total_capacity, 12);
    }
}
