//! Report module - the persisted record of a calculation.
//!
//! # Module Structure
//!
//! - `aggregate` - Report aggregate
//! - `economics` - Recommendation and display economics
//! - `errors` - Report-specific errors

mod aggregate;
mod economics;
mod errors;

pub use aggregate::Report;
pub use economics::{recommended_technology, ReportEconomics, ReportView, TechnologyEconomics};
pub use errors::ReportError;
