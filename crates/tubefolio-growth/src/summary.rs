//! Headline figures for a finished projection.

use serde::{Deserialize, Serialize};

use tubefolio_core::types::YearlySnapshot;

/// The final year of a projection plus its overall return.
///
/// An empty projection summarizes to all zeros.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct ProjectionSummary {
    /// Number of projected years (the last `year_index`), 0 when empty.
    pub years: u32,
    pub cumulative_principal: f64,
    pub compounded_value: f64,
    pub cumulative_returns: f64,
    pub monthly_passive_income_estimate: f64,
    /// Returns as a percentage of principal; 0 when nothing was contributed.
    pub return_percentage: f64,
}

impl ProjectionSummary {
    /// Summarize the last snapshot in `snapshots`.
    pub fn from_snapshots(snapshots: &[YearlySnapshot]) -> Self {
        snapshots.last().map(Self::from_snapshot).unwrap_or_default()
    }

    /// Summarize a single snapshot.
    pub fn from_snapshot(snapshot: &YearlySnapshot) -> Self {
        let return_percentage = if snapshot.cumulative_principal > 0.0 {
            snapshot.cumulative_returns / snapshot.cumulative_principal * 100.0
        } else {
            0.0
        };

        Self {
            years: snapshot.year_index,
            cumulative_principal: snapshot.cumulative_principal,
            compounded_value: snapshot.compounded_value,
            cumulative_returns: snapshot.cumulative_returns,
            monthly_passive_income_estimate: snapshot.monthly_passive_income_estimate,
            return_percentage,
        }
    }

    /// Annual passive income at the withdrawal rate.
    pub fn annual_passive_income_estimate(&self) -> f64 {
        self.monthly_passive_income_estimate * 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CompoundingEngine;
    use tubefolio_core::GrowthProjector;

    #[test]
    fn empty_projection_is_zero() {
        assert_eq!(ProjectionSummary::from_snapshots(&[]), ProjectionSummary::default());
    }

    #[test]
    fn uses_last_snapshot() {
        let snaps = CompoundingEngine::default().project(1000.0, 10);
        let summary = ProjectionSummary::from_snapshots(&snaps);
        assert_eq!(summary.years, 10);
        assert_eq!(summary.compounded_value, snaps[9].compounded_value);
        assert_eq!(summary.cumulative_principal, 120_000.0);
    }

    #[test]
    fn return_percentage_of_principal() {
        let snap = YearlySnapshot {
            year_index: 2,
            cumulative_principal: 200.0,
            compounded_value: 250.0,
            cumulative_returns: 50.0,
            monthly_passive_income_estimate: 0.0,
        };
        assert_eq!(ProjectionSummary::from_snapshot(&snap).return_percentage, 25.0);
    }

    #[test]
    fn zero_principal_has_zero_return_percentage() {
        let snaps = CompoundingEngine::default().project(0.0, 3);
        let summary = ProjectionSummary::from_snapshots(&snaps);
        assert_eq!(summary.years, 3);
        assert_eq!(summary.return_percentage, 0.0);
    }

    #[test]
    fn annual_passive_income() {
        let summary = ProjectionSummary {
            monthly_passive_income_estimate: 100.0,
            ..ProjectionSummary::default()
        };
        assert_eq!(summary.annual_passive_income_estimate(), 1200.0);
    }
}
