//! Equipment sizing and budgetary costing.
//!
//! Two calculators share the costing formula:
//!
//! - [`FlotationSizer`] - DAF, governed by hydraulic and solids loading
//! - [`ClarifierSizer`] - gravity settling, governed by surface overflow rate
//!
//! Both return an [`Estimate`] so that an excluded technology is never
//! mistaken for a zero-area unit.

mod clarifier;
mod costing;
mod estimate;
mod flotation;

pub use clarifier::ClarifierSizer;
pub use costing::{annual_opex, annual_volume_m3, price, SizingResult, DAYS_PER_YEAR, HOURS_PER_DAY};
pub use estimate::{Estimate, NotApplicableReason};
pub(crate) use estimate::positive_input;
pub use flotation::{FlotationSizer, LoadingAreas, RECYCLE_RATIO};
