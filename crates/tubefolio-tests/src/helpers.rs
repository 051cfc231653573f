//! Shared test helpers for pipeline and property tests.

use tubefolio_core::{ActivityMetrics, Currency};

/// Relative tolerance used for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// `a` and `b` agree to [`TOLERANCE`], relative to the larger magnitude
/// (absolute below 1.0).
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// The calculator's stock input: one upload a day, 10k views, RPM 5.7 THB.
pub fn stock_metrics() -> ActivityMetrics {
    ActivityMetrics::from_daily_uploads(1, 10_000, 5.7, Currency::Thb)
}

/// Straight month-by-month compounding, kept independent of the engine.
pub fn simulate_value(contribution: f64, months: u32, annual_yield: f64) -> f64 {
    let monthly_rate = annual_yield / 12.0;
    let mut value = 0.0;
    for _ in 0..months {
        value = (value + contribution) * (1.0 + monthly_rate);
    }
    value
}
