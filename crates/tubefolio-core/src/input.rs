//! Parse-or-zero normalization for engine inputs.
//!
//! Values arrive from live-edited form fields, so half-typed or empty input
//! is normal. [`NumericInput::to_amount`] turns anything into a finite `f64`:
//!
//! - numbers pass through unless they are NaN or infinite;
//! - strings are trimmed and parsed by their longest numeric prefix
//!   (`"12.5k"` → `12.5`, `"-3e2 views"` → `-300.0`);
//! - `None`, unparseable strings and non-finite values become `0.0`.
//!
//! Range checks are not done here; see [`crate::validation`].

/// A value that can be normalized into a finite amount.
pub trait NumericInput {
    /// Finite `f64` view of this value, `0.0` when none exists.
    fn to_amount(&self) -> f64;
}

/// Replace NaN and ±∞ with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Parse the longest numeric prefix of `raw`, or `0.0`.
pub fn parse_or_zero(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let len = numeric_prefix_len(trimmed.as_bytes());
    if len == 0 {
        return 0.0;
    }
    trimmed[..len].parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run.
///
/// Returns 0 when the run contains no mantissa digit.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        // A lone "." with no digits on either side is not a number.
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

impl NumericInput for f64 {
    fn to_amount(&self) -> f64 {
        finite_or_zero(*self)
    }
}

impl NumericInput for f32 {
    fn to_amount(&self) -> f64 {
        finite_or_zero(f64::from(*self))
    }
}

macro_rules! impl_numeric_input_for_int {
    ($($t:ty),*) => {
        $(
            impl NumericInput for $t {
                fn to_amount(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_input_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl NumericInput for str {
    fn to_amount(&self) -> f64 {
        parse_or_zero(self)
    }
}

impl NumericInput for String {
    fn to_amount(&self) -> f64 {
        parse_or_zero(self)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_amount(&self) -> f64 {
        (**self).to_amount()
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    fn to_amount(&self) -> f64 {
        self.as_ref().map_or(0.0, NumericInput::to_amount)
    }
}
