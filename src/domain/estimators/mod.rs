//! Auxiliary estimators layered on the parameter table.
//!
//! - `chemical` - coagulant/flocculant dose and annual cost
//! - `compliance` - measured effluent against discharge limits
//! - `biological` - daily COD/BOD load
//! - `troubleshooting` - remediation tips from a decision table

mod biological;
mod chemical;
mod compliance;
mod troubleshooting;

pub use biological::{
    BiologicalLoad, BiologicalLoadError, BiologicalLoadEstimator, BiologicalLoadOutcome,
    INSUFFICIENT_INPUTS_MESSAGE,
};
pub use chemical::{ChemicalDosage, ChemicalDosageEstimator, DosageEstimate};
pub use compliance::{ComplianceCheck, ComplianceChecker, ComplianceStatus, PH_PARAMETER};
pub use troubleshooting::{troubleshooting_tips, ProblemType, TechnologyContext, GENERIC_TIP};
