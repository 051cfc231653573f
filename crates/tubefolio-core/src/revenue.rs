//! Revenue estimation from channel activity.
//!
//! Monthly revenue is the canonical figure:
//! `monthly = uploads × views / 1000 × rpm`. Daily revenue uses the fixed
//! 30-day month, annual revenue is twelve months, and the channel valuation
//! is a flat multiple of annual revenue.
//!
//! Nothing is rounded here. Negative inputs are not rejected; they propagate
//! through the arithmetic.

use tracing::debug;

use crate::constants::{
    CHANNEL_VALUATION_MULTIPLE, DAYS_PER_MONTH, IMPRESSIONS_PER_VIEW, MONTHS_PER_YEAR,
    VIEWS_PER_MILLE,
};
use crate::input::NumericInput;
use crate::types::{ActivityMetrics, RevenueProjection};

/// Derive revenue figures from raw activity inputs.
///
/// Each argument is normalized with [`NumericInput`], so missing, garbled or
/// non-finite values count as zero and the call never fails.
///
/// # Examples
///
/// ```
/// use tubefolio_core::estimate_revenue;
/// let p = estimate_revenue(30, 10_000, 5.7);
/// assert_eq!(p.total_monthly_views, 300_000.0);
/// assert!((p.monthly_revenue - 1710.0).abs() < 1e-9);
/// ```
pub fn estimate_revenue(
    uploads_per_month: impl NumericInput,
    average_views_per_upload: impl NumericInput,
    revenue_per_mille: impl NumericInput,
) -> RevenueProjection {
    let uploads = uploads_per_month.to_amount();
    let views = average_views_per_upload.to_amount();
    let rpm = revenue_per_mille.to_amount();

    debug!(uploads, views, rpm, "estimating revenue");

    let total_monthly_views = uploads * views;
    let monthly_revenue = (total_monthly_views / VIEWS_PER_MILLE) * rpm;
    let annual_revenue = monthly_revenue * MONTHS_PER_YEAR;

    RevenueProjection {
        total_monthly_views,
        daily_revenue: monthly_revenue / DAYS_PER_MONTH,
        monthly_revenue,
        annual_revenue,
        estimated_impressions: total_monthly_views * IMPRESSIONS_PER_VIEW,
        revenue_per_mille: rpm,
        channel_valuation_estimate: annual_revenue * CHANNEL_VALUATION_MULTIPLE,
    }
}

impl ActivityMetrics {
    /// Revenue figures for these metrics, in the metrics' currency.
    pub fn estimate(&self) -> RevenueProjection {
        estimate_revenue(
            self.uploads_per_month,
            self.average_views_per_upload,
            self.revenue_per_mille,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn reference_channel() {
        let p = estimate_revenue(30, 10_000, 5.7);
        assert_eq!(p.total_monthly_views, 300_000.0);
        assert!(approx_eq(p.monthly_revenue, 1710.0));
        assert!(approx_eq(p.daily_revenue, 57.0));
        assert!(approx_eq(p.annual_revenue, 20_520.0));
        assert!(approx_eq(p.channel_valuation_estimate, 51_300.0));
        assert_eq!(p.estimated_impressions, 2_550_000.0);
        assert_eq!(p.revenue_per_mille, 5.7);
        assert_eq!(p.effective_rpm(), 5.7);
    }

    #[test]
    fn all_zero_inputs() {
        assert_eq!(estimate_revenue(0, 0, 0), RevenueProjection::default());
    }

    #[test]
    fn missing_inputs_count_as_zero() {
        let p = estimate_revenue(None::<f64>, "", "abc");
        assert_eq!(p, RevenueProjection::default());
    }

    #[test]
    fn non_finite_inputs_count_as_zero() {
        let p = estimate_revenue(f64::NAN, 10_000, f64::INFINITY);
        assert_eq!(p.total_monthly_views, 0.0);
        assert_eq!(p.monthly_revenue, 0.0);
        assert_eq!(p.revenue_per_mille, 0.0);
    }

    #[test]
    fn string_inputs_parse() {
        let p = estimate_revenue("30", "10000", "5.7");
        assert!(approx_eq(p.monthly_revenue, 1710.0));
    }

    #[test]
    fn zero_rpm_keeps_views() {
        let p = estimate_revenue(10, 1000, 0);
        assert_eq!(p.total_monthly_views, 10_000.0);
        assert_eq!(p.estimated_impressions, 85_000.0);
        assert_eq!(p.monthly_revenue, 0.0);
        assert_eq!(p.channel_valuation_estimate, 0.0);
    }

    #[test]
    fn negative_rpm_propagates() {
        let p = estimate_revenue(10, 1000, -2.0);
        assert!(approx_eq(p.monthly_revenue, -20.0));
        assert!(approx_eq(p.annual_revenue, -240.0));
    }

    #[test]
    fn metrics_estimate_matches_free_function() {
        let m = ActivityMetrics::from_daily_uploads(1, 10_000, 5.7, Currency::Thb);
        assert_eq!(m.estimate(), estimate_revenue(30, 10_000, 5.7));
    }

    proptest! {
        #[test]
        fn monthly_revenue_formula(
            uploads in 0.0f64..1_000.0,
            views in 0.0f64..10_000_000.0,
            rpm in 0.0f64..1_000.0,
        ) {
            let p = estimate_revenue(uploads, views, rpm);
            prop_assert!(approx_eq(p.monthly_revenue, (uploads * views / 1000.0) * rpm));
            prop_assert!(approx_eq(p.annual_revenue, 12.0 * p.monthly_revenue));
            prop_assert!(approx_eq(p.daily_revenue * 30.0, p.monthly_revenue));
            prop_assert!(approx_eq(p.channel_valuation_estimate, 2.5 * p.annual_revenue));
        }

        #[test]
        fn non_negative_inputs_give_non_negative_outputs(
            uploads in 0.0f64..1_000.0,
            views in 0.0f64..10_000_000.0,
            rpm in 0.0f64..1_000.0,
        ) {
            let p = estimate_revenue(uploads, views, rpm);
            prop_assert!(p.total_monthly_views >= 0.0);
            prop_assert!(p.daily_revenue >= 0.0);
            prop_assert!(p.monthly_revenue >= 0.0);
            prop_assert!(p.annual_revenue >= 0.0);
            prop_assert!(p.estimated_impressions >= 0.0);
            prop_assert!(p.channel_valuation_estimate >= 0.0);
        }
    }
}
