//! Engineering Parameter Table.
//!
//! Per-industry design coefficients (loading rates, dose models, cost bands,
//! OPEX rates, discharge limits, BOD/COD ratio). Pure data: the calculators
//! in `sizing` and `estimators` hold no numeric coefficients of their own.

mod builtin;
mod profile;
mod table;
mod technology;

pub use builtin::{DAIRY_PROCESSING, FOOD_BEVERAGE, MEAT_PROCESSING, MINING_BENEFICIATION};
pub use profile::{
    ClarifierParameters, CostBand, CostParameters, DafParameters, DoseCoefficients,
    IndustryProfile, OpexRates, RegulatoryLimits, TechnologyCosts, DEFAULT_BOD_COD_RATIO,
};
pub use table::{
    ParameterTable, ParameterTableError, DEFAULT_INDUSTRY, DEFAULT_REFERENCE_DOSE_MG_L,
};
pub use technology::Technology;
