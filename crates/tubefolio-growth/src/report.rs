//! End-to-end calculator report.
//!
//! Runs the one-way pipeline: activity metrics → revenue estimate →
//! 10-5-85 split → growth projection of the investment share. Each stage
//! only sees the previous stage's output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tubefolio_core::traits::GrowthProjector;
use tubefolio_core::types::{ActivityMetrics, AllocationSplit, RevenueProjection, YearlySnapshot};
use tubefolio_core::split_allocation;

use crate::summary::ProjectionSummary;

/// Everything the calculator shows for one set of inputs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Report {
    pub metrics: ActivityMetrics,
    pub revenue: RevenueProjection,
    pub allocation: AllocationSplit,
    pub annual_allocation: AllocationSplit,
    pub horizon_years: i64,
    pub annual_yield: f64,
    pub withdrawal_rate: f64,
    pub projection: Vec<YearlySnapshot>,
    pub summary: ProjectionSummary,
}

/// Build a [`Report`] for `metrics` over `horizon_years`.
///
/// A non-positive horizon produces an empty projection and a zero summary.
pub fn build_report<P>(metrics: &ActivityMetrics, horizon_years: i64, projector: &P) -> Report
where
    P: GrowthProjector + ?Sized,
{
    let revenue = metrics.estimate();
    let allocation = split_allocation(revenue.monthly_revenue);
    let projection = projector.project(allocation.growth_investment, horizon_years);
    let summary = ProjectionSummary::from_snapshots(&projection);

    debug!(
        monthly_revenue = revenue.monthly_revenue,
        growth_investment = allocation.growth_investment,
        years = projection.len(),
        "report built"
    );

    Report {
        metrics: *metrics,
        revenue,
        allocation,
        annual_allocation: allocation.annualized(),
        horizon_years,
        annual_yield: projector.annual_yield(),
        withdrawal_rate: projector.withdrawal_rate(),
        projection,
        summary,
    }
}
