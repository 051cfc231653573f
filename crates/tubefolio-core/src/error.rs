//! Error types for Tubefolio.
//!
//! The computation engine is total and never returns these. They cover the
//! edges around it: strict currency-code parsing and the optional input-form
//! validation rules.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("unsupported currency code: {0}")] Unsupported(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("uploads per day cannot be negative: {0}")] NegativeUploads(f64),
    #[error("uploads per day above {max}: {value}")] TooManyUploads { value: f64, max: f64 },
    #[error("average views cannot be negative: {0}")] NegativeViews(f64),
    #[error("RPM cannot be negative: {0}")] NegativeRpm(f64),
    #[error("RPM above {max}: {value}")] RpmTooHigh { value: f64, max: f64 },
    #[error("horizon must be between 1 and {max} years: {value}")] HorizonOutOfRange { value: i64, max: i64 },
}
