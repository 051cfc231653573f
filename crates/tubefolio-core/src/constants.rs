//! Model assumptions. Every multiplier the engine applies lives here.
//!
//! None of these are configurable at runtime; they document the fixed
//! model the estimates are built on.

/// Days in the approximated month used for daily revenue and daily cadence.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Months per year for annualizing monthly figures.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Views per unit of the revenue-per-mille rate.
pub const VIEWS_PER_MILLE: f64 = 1000.0;

/// Estimated impressions generated per view.
pub const IMPRESSIONS_PER_VIEW: f64 = 8.5;

/// Channel valuation as a multiple of annual revenue.
pub const CHANNEL_VALUATION_MULTIPLE: f64 = 2.5;

// ---------------------------------------------------------------------------
// 10-5-85 allocation
// ---------------------------------------------------------------------------

/// Share of monthly revenue paid out to the operator.
pub const OPERATOR_DRAW_WEIGHT: f64 = 0.10;

/// Share of monthly revenue reinvested into the channel itself.
pub const REINVESTMENT_WEIGHT: f64 = 0.05;

/// Share of monthly revenue sent to the long-term growth investment.
pub const GROWTH_INVESTMENT_WEIGHT: f64 = 0.85;

// ---------------------------------------------------------------------------
// Growth projection
// ---------------------------------------------------------------------------

/// Default annual yield of the growth investment (7%).
pub const DEFAULT_ANNUAL_YIELD: f64 = 0.07;

/// Default sustainable annual withdrawal rate (the 4% rule).
pub const DEFAULT_WITHDRAWAL_RATE: f64 = 0.04;

/// Compounding periods per projected year.
pub const MONTHS_PER_PROJECTION_YEAR: i64 = 12;

/// Longest horizon the input form offers, in years.
pub const MAX_HORIZON_YEARS: i64 = 30;

/// Horizon preselected by the input form, in years.
pub const DEFAULT_HORIZON_YEARS: i64 = 10;

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Fixed exchange rate: Thai baht per US dollar.
pub const USD_TO_THB: f64 = 31.59;

// ---------------------------------------------------------------------------
// Input form limits
// ---------------------------------------------------------------------------

/// Highest upload cadence the input form accepts, in uploads per day.
pub const MAX_UPLOADS_PER_DAY: f64 = 100.0;

/// Highest revenue-per-mille rate the input form accepts.
pub const MAX_REVENUE_PER_MILLE: f64 = 1000.0;
