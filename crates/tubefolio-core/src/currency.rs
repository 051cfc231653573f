//! Fixed-rate currency rescaling.
//!
//! Two currencies are supported with a single static exchange rate
//! ([`USD_TO_THB`]). Rescaling applies only to the user-entered RPM when the
//! display currency toggles; computed outputs are never converted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::USD_TO_THB;
use crate::error::CurrencyError;
use crate::input::NumericInput;

/// Display currency for monetary inputs and outputs.
///
/// # Examples
///
/// ```
/// use tubefolio_core::Currency;
/// assert_eq!(Currency::default(), Currency::Thb);
/// assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
/// assert_eq!(Currency::Usd.to_string(), "USD");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Thai baht.
    #[default]
    Thb,
    /// US dollar.
    Usd,
}

impl Currency {
    /// Every supported currency, in toggle order.
    pub const ALL: [Currency; 2] = [Currency::Thb, Currency::Usd];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Thb => "THB",
            Self::Usd => "USD",
        }
    }

    /// Symbol prefixed to formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Thb => "฿",
            Self::Usd => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "THB" => Ok(Self::Thb),
            "USD" => Ok(Self::Usd),
            _ => Err(CurrencyError::Unsupported(s.trim().to_string())),
        }
    }
}

/// Convert `amount` from one currency to the other at the fixed rate.
///
/// USD → THB multiplies by the rate, THB → USD divides by it, and the same
/// currency on both sides returns the amount unchanged.
///
/// # Examples
///
/// ```
/// use tubefolio_core::{rescale, Currency};
/// assert_eq!(rescale(1.0, Currency::Usd, Currency::Thb), 31.59);
/// assert_eq!(rescale(31.59, Currency::Thb, Currency::Usd), 1.0);
/// ```
pub fn rescale(amount: impl NumericInput, from: Currency, to: Currency) -> f64 {
    let amount = amount.to_amount();
    match (from, to) {
        (Currency::Usd, Currency::Thb) => amount * USD_TO_THB,
        (Currency::Thb, Currency::Usd) => amount / USD_TO_THB,
        _ => amount,
    }
}

/// Rescale an entered RPM and round it to cents, as the input form shows it.
///
/// Returns the amount unchanged when the currency does not change.
pub fn rescale_rpm(rpm: impl NumericInput, from: Currency, to: Currency) -> f64 {
    let rpm = rpm.to_amount();
    if from == to {
        return rpm;
    }
    round_to_cents(rescale(rpm, from, to))
}

/// Round to two decimal places from the exact binary value, half away from zero.
///
/// `0.015` is stored just below the half cent and rounds to `0.01`, the same
/// digits a fixed-point formatter prints.
pub fn round_to_cents(amount: f64) -> f64 {
    let magnitude = amount.abs();
    let scaled = magnitude * 100.0;
    // Sign of the error the multiplication rounded away.
    let residual = magnitude.mul_add(100.0, -scaled);
    let cents = if scaled.fract() == 0.5 && residual < 0.0 {
        scaled.floor()
    } else {
        scaled.round()
    };
    (cents / 100.0).copysign(amount)
}
