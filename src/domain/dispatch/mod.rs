//! Concept dispatch.
//!
//! Raw form input is coerced (`RawInputs`), the concept focus is parsed into
//! a closed enum, a typed `CalculationRequest` is built, and the
//! `ConceptDispatcher` runs the matching calculators.

mod calculated_data;
mod concept;
mod dispatcher;
pub mod inputs;
mod request;

pub use calculated_data::CalculatedData;
pub use concept::ConceptFocus;
pub use dispatcher::ConceptDispatcher;
pub use inputs::RawInputs;
pub use request::{CalculationRequest, ContaminantType, SiteInputs};
