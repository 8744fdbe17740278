//! Business settings resolution and validation

use std::sync::Arc;

use shared::{AppError, AppResult, ErrorCode};

use crate::db::models::{BusinessProfile, BusinessSettings};
use crate::db::repository::BusinessRepository;

/// Loads business profiles for the engine and enforces the settings
/// rules on write.
pub struct SettingsResolver {
    businesses: Arc<BusinessRepository>,
}

impl SettingsResolver {
    pub fn new(businesses: Arc<BusinessRepository>) -> Self {
        Self { businesses }
    }

    /// Fetch a business profile, mapping a miss to the domain error
    pub async fn get(&self, business_id: &str) -> AppResult<BusinessProfile> {
        self.businesses.find_by_id(business_id).await.map_err(|err| {
            match err {
                crate::db::repository::RepoError::NotFound(_) => AppError::with_message(
                    ErrorCode::BusinessNotFound,
                    format!("Business not found: {}", business_id),
                ),
                other => other.into(),
            }
        })
    }

    /// Fetch a business and require it to be approved for bookings
    pub async fn get_active(&self, business_id: &str) -> AppResult<BusinessProfile> {
        let business = self.get(business_id).await?;
        if !business.active {
            return Err(AppError::with_message(
                ErrorCode::BusinessInactive,
                "Business is not yet approved for bookings",
            ));
        }
        Ok(business)
    }
}

/// Validate a settings block before it is persisted.
///
/// Rejects inverted or zero-length operating windows, slot durations
/// that are not a positive multiple of five minutes, and per-slot
/// limits exceeding the physical or theoretical capacity.
pub fn validate_settings(settings: &BusinessSettings) -> AppResult<()> {
    for window in &settings.operating_windows {
        if window.open >= window.close {
            return Err(AppError::with_message(
                ErrorCode::InvalidOperatingWindow,
                format!(
                    "Operating window must open before it closes: {} >= {}",
                    window.open.format("%H:%M"),
                    window.close.format("%H:%M"),
                ),
            ));
        }
    }

    let duration = settings.slot_duration_minutes;
    if duration == 0 || duration % 5 != 0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidSlotDuration,
            format!(
                "Slot duration must be a positive multiple of 5 minutes, got {}",
                duration
            ),
        ));
    }

    for period in settings
        .closure_periods
        .iter()
        .chain(settings.opening_periods.iter())
    {
        if period.start > period.end {
            return Err(AppError::validation(format!(
                "Date period starts after it ends: {} > {}",
                period.start, period.end
            )));
        }
    }

    if settings.max_per_slot > 0 {
        if settings.total_capacity > 0 && settings.max_per_slot > settings.total_capacity {
            return Err(AppError::with_message(
                ErrorCode::SlotLimitExceedsCapacity,
                format!(
                    "Per-slot limit {} exceeds total capacity {}",
                    settings.max_per_slot, settings.total_capacity
                ),
            ));
        }
        if settings.theoretical_capacity > 0
            && settings.max_per_slot > settings.theoretical_capacity
        {
            return Err(AppError::with_message(
                ErrorCode::SlotLimitExceedsCapacity,
                format!(
                    "Per-slot limit {} exceeds table capacity {}",
                    settings.max_per_slot, settings.theoretical_capacity
                ),
            ));
        }
    }

    Ok(())
}

/// Recompute the theoretical capacity from the table inventory.
/// Called whenever settings are written so the stored value never
/// drifts from the configured tables.
pub fn apply_theoretical_capacity(settings: &mut BusinessSettings) {
    if settings.tables.is_configured() {
        settings.theoretical_capacity = settings.tables.theoretical_capacity();
    }
}
