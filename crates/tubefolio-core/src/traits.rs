//! Trait interfaces between Tubefolio crates.
//!
//! - [`GrowthProjector`] — investment growth simulation (tubefolio-growth implements)

use crate::types::YearlySnapshot;

/// Projection of a recurring monthly contribution over whole years.
///
/// Implementations must be deterministic: the same inputs always produce the
/// same sequence, bit for bit. They never fail; a non-positive horizon
/// yields an empty sequence.
pub trait GrowthProjector: Send + Sync {
    /// One snapshot per completed year, ordered by `year_index` ascending.
    ///
    /// `monthly_contribution` is expected to be finite; implementations
    /// treat non-finite values as zero.
    fn project(&self, monthly_contribution: f64, horizon_years: i64) -> Vec<YearlySnapshot>;

    /// Annual yield the projection compounds at.
    fn annual_yield(&self) -> f64;

    /// Annual withdrawal rate used for the passive income estimate.
    fn withdrawal_rate(&self) -> f64;

    /// Snapshot for the final year of `horizon_years`, if any.
    ///
    /// Default implementation runs the full projection and keeps the last
    /// entry.
    fn final_snapshot(
        &self,
        monthly_contribution: f64,
        horizon_years: i64,
    ) -> Option<YearlySnapshot> {
        self.project(monthly_contribution, horizon_years).pop()
    }
}
