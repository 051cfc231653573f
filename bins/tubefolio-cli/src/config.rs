//! Calculator configuration loaded from environment variables.
//!
//! Defaults reproduce the calculator's stock model (THB display, 7% yield,
//! 4% withdrawal, ten-year horizon). Command-line flags are applied on top
//! by `main`.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tubefolio_core::constants::{
    DEFAULT_ANNUAL_YIELD, DEFAULT_HORIZON_YEARS, DEFAULT_WITHDRAWAL_RATE,
};
use tubefolio_core::Currency;

pub const ENV_CURRENCY: &str = "TUBEFOLIO_CURRENCY";
pub const ENV_ANNUAL_YIELD: &str = "TUBEFOLIO_ANNUAL_YIELD";
pub const ENV_WITHDRAWAL_RATE: &str = "TUBEFOLIO_WITHDRAWAL_RATE";
pub const ENV_HORIZON_YEARS: &str = "TUBEFOLIO_HORIZON_YEARS";
pub const ENV_LOG_LEVEL: &str = "TUBEFOLIO_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "TUBEFOLIO_LOG_FORMAT";

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorConfig {
    /// Currency amounts are entered and displayed in.
    pub currency: Currency,
    /// Annual yield of the growth investment.
    pub annual_yield: f64,
    /// Annual withdrawal rate for passive income estimates.
    pub withdrawal_rate: f64,
    /// Projection horizon in years.
    pub horizon_years: i64,
    /// Log level filter string (e.g. "info", "debug", "tubefolio_growth=trace").
    pub log_level: String,
    /// Log output format ("text" or "json").
    pub log_format: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            annual_yield: DEFAULT_ANNUAL_YIELD,
            withdrawal_rate: DEFAULT_WITHDRAWAL_RATE,
            horizon_years: DEFAULT_HORIZON_YEARS,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults; set but malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let currency = match lookup(ENV_CURRENCY) {
            Some(raw) => Currency::from_str(&raw)
                .with_context(|| format!("{ENV_CURRENCY} must be THB or USD"))?,
            None => defaults.currency,
        };

        let annual_yield = match lookup(ENV_ANNUAL_YIELD) {
            Some(raw) => parse_rate(ENV_ANNUAL_YIELD, &raw)?,
            None => defaults.annual_yield,
        };

        let withdrawal_rate = match lookup(ENV_WITHDRAWAL_RATE) {
            Some(raw) => parse_rate(ENV_WITHDRAWAL_RATE, &raw)?,
            None => defaults.withdrawal_rate,
        };

        let horizon_years = match lookup(ENV_HORIZON_YEARS) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("{ENV_HORIZON_YEARS} must be an integer"))?,
            None => defaults.horizon_years,
        };

        let log_level = lookup(ENV_LOG_LEVEL).unwrap_or(defaults.log_level);

        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(raw) => parse_log_format(&raw)
                .with_context(|| format!("{ENV_LOG_FORMAT} is invalid"))?,
            None => defaults.log_format,
        };

        Ok(Self {
            currency,
            annual_yield,
            withdrawal_rate,
            horizon_years,
            log_level,
            log_format,
        })
    }
}

/// Parse a finite decimal rate such as `0.07`.
fn parse_rate(name: &str, raw: &str) -> Result<f64> {
    let rate: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{name} must be a decimal rate (e.g. 0.07)"))?;
    if !rate.is_finite() {
        bail!("{name} must be finite, got {raw}");
    }
    Ok(rate)
}

/// Accept "text" or "json", case-insensitively.
pub fn parse_log_format(raw: &str) -> Result<String> {
    let format = raw.trim().to_ascii_lowercase();
    match format.as_str() {
        "text" | "json" => Ok(format),
        _ => bail!("log format must be 'text' or 'json', got '{raw}'"),
    }
}
