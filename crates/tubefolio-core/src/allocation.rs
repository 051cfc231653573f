//! The 10-5-85 allocation rule.
//!
//! Monthly revenue is split into three fixed shares: 10% operator draw,
//! 5% reinvestment in the channel, 85% growth investment. The weights are
//! constants and always sum to 100%.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    GROWTH_INVESTMENT_WEIGHT, MONTHS_PER_YEAR, OPERATOR_DRAW_WEIGHT, REINVESTMENT_WEIGHT,
};
use crate::input::NumericInput;
use crate::types::AllocationSplit;

/// One of the three allocation shares.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationBucket {
    OperatorDraw,
    Reinvestment,
    GrowthInvestment,
}

impl AllocationBucket {
    /// All buckets in display order.
    pub const ALL: [AllocationBucket; 3] = [
        AllocationBucket::OperatorDraw,
        AllocationBucket::Reinvestment,
        AllocationBucket::GrowthInvestment,
    ];

    /// Fraction of revenue assigned to this bucket.
    pub fn weight(&self) -> f64 {
        match self {
            Self::OperatorDraw => OPERATOR_DRAW_WEIGHT,
            Self::Reinvestment => REINVESTMENT_WEIGHT,
            Self::GrowthInvestment => GROWTH_INVESTMENT_WEIGHT,
        }
    }

    /// Whole-number percentage for display.
    pub fn percent(&self) -> u8 {
        match self {
            Self::OperatorDraw => 10,
            Self::Reinvestment => 5,
            Self::GrowthInvestment => 85,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OperatorDraw => "Operator draw",
            Self::Reinvestment => "Reinvestment",
            Self::GrowthInvestment => "Growth investment",
        }
    }
}

/// Split a monthly revenue figure under the 10-5-85 rule.
///
/// Pure multiplication; no rounding. Negative revenue is split
/// proportionally rather than rejected.
///
/// # Examples
///
/// ```
/// use tubefolio_core::split_allocation;
/// let s = split_allocation(1000.0);
/// assert_eq!(s.operator_draw, 100.0);
/// assert_eq!(s.reinvestment_budget, 50.0);
/// assert_eq!(s.growth_investment, 850.0);
/// ```
pub fn split_allocation(monthly_revenue: impl NumericInput) -> AllocationSplit {
    let revenue = monthly_revenue.to_amount();
    debug!(revenue, "splitting allocation");

    AllocationSplit {
        operator_draw: revenue * OPERATOR_DRAW_WEIGHT,
        reinvestment_budget: revenue * REINVESTMENT_WEIGHT,
        growth_investment: revenue * GROWTH_INVESTMENT_WEIGHT,
    }
}

impl AllocationSplit {
    /// Amount assigned to `bucket`.
    pub fn amount(&self, bucket: AllocationBucket) -> f64 {
        match bucket {
            AllocationBucket::OperatorDraw => self.operator_draw,
            AllocationBucket::Reinvestment => self.reinvestment_budget,
            AllocationBucket::GrowthInvestment => self.growth_investment,
        }
    }

    /// Sum of the three shares; equals the split revenue up to rounding.
    pub fn total(&self) -> f64 {
        self.operator_draw + self.reinvestment_budget + self.growth_investment
    }

    /// The same split over twelve months.
    pub fn annualized(&self) -> AllocationSplit {
        AllocationSplit {
            operator_draw: self.operator_draw * MONTHS_PER_YEAR,
            reinvestment_budget: self.reinvestment_budget * MONTHS_PER_YEAR,
            growth_investment: self.growth_investment * MONTHS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn reference_revenue() {
        let s = split_allocation(1710.0);
        assert!(approx_eq(s.operator_draw, 171.0));
        assert!(approx_eq(s.reinvestment_budget, 85.5));
        assert!(approx_eq(s.growth_investment, 1453.5));
    }

    #[test]
    fn zero_revenue() {
        assert_eq!(split_allocation(0.0), AllocationSplit::default());
    }

    #[test]
    fn garbage_revenue_is_zero() {
        assert_eq!(split_allocation("pending"), AllocationSplit::default());
        assert_eq!(split_allocation(f64::NAN), AllocationSplit::default());
    }

    #[test]
    fn negative_revenue_propagates() {
        let s = split_allocation(-100.0);
        assert!(approx_eq(s.operator_draw, -10.0));
        assert!(approx_eq(s.reinvestment_budget, -5.0));
        assert!(approx_eq(s.growth_investment, -85.0));
    }

    #[test]
    fn bucket_weights_match_percentages() {
        for bucket in AllocationBucket::ALL {
            assert!(approx_eq(bucket.weight() * 100.0, f64::from(bucket.percent())));
        }
        let total: u32 = AllocationBucket::ALL.iter().map(|b| u32::from(b.percent())).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn amount_by_bucket() {
        let s = split_allocation(200.0);
        assert_eq!(s.amount(AllocationBucket::OperatorDraw), s.operator_draw);
        assert_eq!(s.amount(AllocationBucket::Reinvestment), s.reinvestment_budget);
        assert_eq!(s.amount(AllocationBucket::GrowthInvestment), s.growth_investment);
    }

    #[test]
    fn annualized_is_twelve_months() {
        let s = split_allocation(1710.0).annualized();
        assert!(approx_eq(s.operator_draw, 2052.0));
        assert!(approx_eq(s.reinvestment_budget, 1026.0));
        assert!(approx_eq(s.growth_investment, 17_442.0));
    }

    proptest! {
        #[test]
        fn shares_sum_to_revenue(revenue in -1.0e9f64..1.0e9f64) {
            let s = split_allocation(revenue);
            prop_assert!(approx_eq(s.total(), revenue));
        }

        #[test]
        fn shares_keep_fixed_ratios(revenue in 1.0f64..1.0e9f64) {
            let s = split_allocation(revenue);
            prop_assert!(approx_eq(s.operator_draw / revenue, 0.10));
            prop_assert!(approx_eq(s.reinvestment_budget / revenue, 0.05));
            prop_assert!(approx_eq(s.growth_investment / revenue, 0.85));
        }
    }
}
