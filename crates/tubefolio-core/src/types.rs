//! Value records flowing through the estimation pipeline.
//!
//! All of these are plain immutable data produced fresh on every
//! recalculation. Monetary fields are in whatever currency the RPM was
//! entered in; the engine never converts outputs.

use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_MONTH;
use crate::currency::Currency;
use crate::input::NumericInput;

/// Channel activity as entered by the user.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct ActivityMetrics {
    /// Uploads published per month.
    pub uploads_per_month: f64,
    /// Average views each upload receives.
    pub average_views_per_upload: f64,
    /// Revenue per thousand views.
    pub revenue_per_mille: f64,
    /// Currency the RPM is denominated in.
    pub currency: Currency,
}

impl ActivityMetrics {
    /// Build metrics from raw form values, normalizing each one.
    pub fn new(
        uploads_per_month: impl NumericInput,
        average_views_per_upload: impl NumericInput,
        revenue_per_mille: impl NumericInput,
        currency: Currency,
    ) -> Self {
        Self {
            uploads_per_month: uploads_per_month.to_amount(),
            average_views_per_upload: average_views_per_upload.to_amount(),
            revenue_per_mille: revenue_per_mille.to_amount(),
            currency,
        }
    }

    /// Build metrics from a daily upload cadence over a 30-day month.
    pub fn from_daily_uploads(
        uploads_per_day: impl NumericInput,
        average_views_per_upload: impl NumericInput,
        revenue_per_mille: impl NumericInput,
        currency: Currency,
    ) -> Self {
        Self::new(
            uploads_per_day.to_amount() * DAYS_PER_MONTH,
            average_views_per_upload,
            revenue_per_mille,
            currency,
        )
    }

    /// Uploads per day implied by the monthly cadence.
    pub fn uploads_per_day(&self) -> f64 {
        self.uploads_per_month / DAYS_PER_MONTH
    }

    /// The same metrics with the RPM re-expressed in `target`.
    ///
    /// Uses [`crate::currency::rescale_rpm`], so the rate is rounded to cents.
    pub fn in_currency(&self, target: Currency) -> Self {
        Self {
            revenue_per_mille: crate::currency::rescale_rpm(
                self.revenue_per_mille,
                self.currency,
                target,
            ),
            currency: target,
            ..*self
        }
    }
}

/// Revenue figures derived from [`ActivityMetrics`].
///
/// `monthly_revenue` is canonical; every other monetary field is derived
/// from it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct RevenueProjection {
    pub total_monthly_views: f64,
    pub daily_revenue: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub estimated_impressions: f64,
    /// The input rate, echoed unchanged.
    pub revenue_per_mille: f64,
    pub channel_valuation_estimate: f64,
}

impl RevenueProjection {
    /// Effective RPM across the period.
    ///
    /// Views are not segmented by rate, so this is the input rate.
    pub fn effective_rpm(&self) -> f64 {
        self.revenue_per_mille
    }
}

/// Monthly revenue split under the 10-5-85 rule.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct AllocationSplit {
    /// 10%: the operator's own pay.
    pub operator_draw: f64,
    /// 5%: equipment, software and skills for the channel.
    pub reinvestment_budget: f64,
    /// 85%: contributed to the compounding growth investment.
    pub growth_investment: f64,
}

/// State of the growth investment at the end of a projected year.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct YearlySnapshot {
    /// 1-based year number.
    pub year_index: u32,
    /// Sum of all contributions so far.
    pub cumulative_principal: f64,
    /// Balance after this year's final compounding step.
    pub compounded_value: f64,
    /// `compounded_value - cumulative_principal`.
    pub cumulative_returns: f64,
    /// Sustainable monthly income at the withdrawal rate.
    pub monthly_passive_income_estimate: f64,
}
