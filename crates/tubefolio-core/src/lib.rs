//! # tubefolio-core
//! Revenue estimation, allocation and currency primitives for Tubefolio.
//!
//! Every computation here is a pure function of its arguments: no I/O, no
//! shared state, no errors. Inputs pass through [`NumericInput`] so that
//! missing or malformed values degrade to zero instead of failing.

pub mod allocation;
pub mod constants;
pub mod currency;
pub mod error;
pub mod input;
pub mod revenue;
pub mod traits;
pub mod types;
pub mod validation;

pub use allocation::split_allocation;
pub use currency::{rescale, rescale_rpm, Currency};
pub use error::{CurrencyError, ValidationError};
pub use input::NumericInput;
pub use revenue::estimate_revenue;
pub use traits::GrowthProjector;
pub use types::{ActivityMetrics, AllocationSplit, RevenueProjection, YearlySnapshot};
