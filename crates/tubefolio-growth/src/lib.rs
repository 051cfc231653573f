//! # tubefolio-growth — Compounding growth projection.
//!
//! The growth investment share of monthly revenue is contributed every month
//! and compounded at a fixed annual yield:
//! - **Monthly compounding**: each month the contribution is added first,
//!   then the whole balance grows by `annual_yield / 12`.
//! - **Yearly snapshots**: one per completed twelve-month block, with
//!   principal, balance, returns and a withdrawal-rate income estimate.
//! - **Reports**: the full metrics → revenue → allocation → projection
//!   pipeline bundled into one serializable value.

pub mod engine;
pub mod report;
pub mod summary;

pub use engine::{project_growth, project_growth_at_defaults, CompoundingEngine};
pub use report::{build_report, Report};
pub use summary::ProjectionSummary;
