//! Input-form validation rules.
//!
//! The engine accepts any number; these checks are for callers that want to
//! stop recalculating while the user has an out-of-range value typed in.
//! They report the first violation found, checking fields in form order.

use crate::constants::{MAX_HORIZON_YEARS, MAX_REVENUE_PER_MILLE, MAX_UPLOADS_PER_DAY};
use crate::error::ValidationError;
use crate::types::ActivityMetrics;

/// Check an uploads-per-day value against the form limits.
pub fn validate_uploads_per_day(value: f64) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::NegativeUploads(value));
    }
    if value > MAX_UPLOADS_PER_DAY {
        return Err(ValidationError::TooManyUploads {
            value,
            max: MAX_UPLOADS_PER_DAY,
        });
    }
    Ok(())
}

/// Check an average-views value.
pub fn validate_views(value: f64) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::NegativeViews(value));
    }
    Ok(())
}

/// Check a revenue-per-mille value against the form limits.
pub fn validate_rpm(value: f64) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::NegativeRpm(value));
    }
    if value > MAX_REVENUE_PER_MILLE {
        return Err(ValidationError::RpmTooHigh {
            value,
            max: MAX_REVENUE_PER_MILLE,
        });
    }
    Ok(())
}

/// Check a projection horizon: `1..=MAX_HORIZON_YEARS`.
pub fn validate_horizon(years: i64) -> Result<(), ValidationError> {
    if !(1..=MAX_HORIZON_YEARS).contains(&years) {
        return Err(ValidationError::HorizonOutOfRange {
            value: years,
            max: MAX_HORIZON_YEARS,
        });
    }
    Ok(())
}

/// Validate all activity metrics. The upload limit applies per day.
pub fn validate_metrics(metrics: &ActivityMetrics) -> Result<(), ValidationError> {
    validate_uploads_per_day(metrics.uploads_per_day())?;
    validate_views(metrics.average_views_per_upload)?;
    validate_rpm(metrics.revenue_per_mille)?;
    Ok(())
}
