//! Compounding engine implementing the [`GrowthProjector`] trait.
//!
//! Simulates the growth investment month by month. The order of operations
//! is fixed: add the month's contribution, then multiply the balance by
//! `1 + annual_yield / 12`. Interest therefore accrues on a balance that
//! already includes the current month's contribution. Principal is a plain
//! running sum and never compounds.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use tubefolio_core::constants::{
    DEFAULT_ANNUAL_YIELD, DEFAULT_WITHDRAWAL_RATE, MAX_HORIZON_YEARS, MONTHS_PER_PROJECTION_YEAR,
    MONTHS_PER_YEAR,
};
use tubefolio_core::input::{finite_or_zero, NumericInput};
use tubefolio_core::traits::GrowthProjector;
use tubefolio_core::types::YearlySnapshot;

/// The production growth projector: fixed-rate monthly compounding.
///
/// # Examples
///
/// ```
/// use tubefolio_core::GrowthProjector;
/// use tubefolio_growth::CompoundingEngine;
///
/// let engine = CompoundingEngine::default();
/// let years = engine.project(1000.0, 3);
/// assert_eq!(years.len(), 3);
/// assert_eq!(years[2].year_index, 3);
/// assert_eq!(years[2].cumulative_principal, 36_000.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CompoundingEngine {
    annual_yield: f64,
    withdrawal_rate: f64,
}

impl Default for CompoundingEngine {
    fn default() -> Self {
        Self {
            annual_yield: DEFAULT_ANNUAL_YIELD,
            withdrawal_rate: DEFAULT_WITHDRAWAL_RATE,
        }
    }
}

impl CompoundingEngine {
    /// Create an engine with the given rates. Non-finite rates become zero.
    pub fn new(annual_yield: impl NumericInput, withdrawal_rate: impl NumericInput) -> Self {
        Self {
            annual_yield: annual_yield.to_amount(),
            withdrawal_rate: withdrawal_rate.to_amount(),
        }
    }

    /// Same withdrawal rate, different yield.
    pub fn with_annual_yield(self, annual_yield: impl NumericInput) -> Self {
        Self {
            annual_yield: annual_yield.to_amount(),
            ..self
        }
    }

    /// Same yield, different withdrawal rate.
    pub fn with_withdrawal_rate(self, withdrawal_rate: impl NumericInput) -> Self {
        Self {
            withdrawal_rate: withdrawal_rate.to_amount(),
            ..self
        }
    }

    /// Per-month growth multiplier, `1 + annual_yield / 12`.
    pub fn monthly_growth_factor(&self) -> f64 {
        1.0 + self.annual_yield / MONTHS_PER_YEAR
    }
}

impl GrowthProjector for CompoundingEngine {
    fn project(&self, monthly_contribution: f64, horizon_years: i64) -> Vec<YearlySnapshot> {
        if horizon_years <= 0 {
            return Vec::new();
        }
        // Year indices are u32; anything longer stops at the last one.
        let years = u32::try_from(horizon_years).unwrap_or_else(|_| {
            warn!(horizon_years, "horizon exceeds u32 years, truncating");
            u32::MAX
        });

        let contribution = finite_or_zero(monthly_contribution);
        let growth_factor = self.monthly_growth_factor();

        debug!(
            contribution,
            years,
            annual_yield = self.annual_yield,
            withdrawal_rate = self.withdrawal_rate,
            "projecting growth"
        );

        let mut snapshots = Vec::with_capacity(years.min(MAX_HORIZON_YEARS as u32) as usize);
        let mut value = 0.0_f64;
        let mut principal = 0.0_f64;

        for year_index in 1..=years {
            for _ in 0..MONTHS_PER_PROJECTION_YEAR {
                principal += contribution;
                value = (value + contribution) * growth_factor;
            }

            let snapshot = YearlySnapshot {
                year_index,
                cumulative_principal: principal,
                compounded_value: value,
                cumulative_returns: value - principal,
                monthly_passive_income_estimate: (value * self.withdrawal_rate) / MONTHS_PER_YEAR,
            };
            trace!(year = year_index, value, "year closed");
            snapshots.push(snapshot);
        }

        snapshots
    }

    fn annual_yield(&self) -> f64 {
        self.annual_yield
    }

    fn withdrawal_rate(&self) -> f64 {
        self.withdrawal_rate
    }
}

/// Project a monthly contribution over `horizon_years` at explicit rates.
///
/// Every numeric argument goes through [`NumericInput`].
pub fn project_growth(
    monthly_contribution: impl NumericInput,
    horizon_years: i64,
    annual_yield: impl NumericInput,
    withdrawal_rate: impl NumericInput,
) -> Vec<YearlySnapshot> {
    CompoundingEngine::new(annual_yield, withdrawal_rate)
        .project(monthly_contribution.to_amount(), horizon_years)
}

/// [`project_growth`] at the default 7% yield and 4% withdrawal rate.
pub fn project_growth_at_defaults(
    monthly_contribution: impl NumericInput,
    horizon_years: i64,
) -> Vec<YearlySnapshot> {
    CompoundingEngine::default().project(monthly_contribution.to_amount(), horizon_years)
}
