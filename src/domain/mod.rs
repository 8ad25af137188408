//! Domain layer containing the sizing engine and report types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `parameters` - Per-industry design coefficients and cost factors
//! - `sizing` - DAF and clarifier sizing with CAPEX/OPEX
//! - `estimators` - Chemical dosage, compliance, biological load, troubleshooting
//! - `dispatch` - Concept focus routing over the calculators
//! - `report` - The persisted calculation record and its display economics

pub mod dispatch;
pub mod estimators;
pub mod foundation;
pub mod parameters;
pub mod report;
pub mod sizing;
