//! Concept Dispatcher - routes a request to its calculators.

use std::sync::Arc;

use crate::domain::estimators::{
    troubleshooting_tips, BiologicalLoadEstimator, BiologicalLoadOutcome, ChemicalDosageEstimator,
    ComplianceChecker,
};
use crate::domain::parameters::ParameterTable;
use crate::domain::sizing::{ClarifierSizer, FlotationSizer};

use super::request::SiteInputs;
use super::{CalculatedData, CalculationRequest, ConceptFocus, RawInputs};

/// Stateless dispatcher over the calculators.
///
/// Never fails: every request yields a well-formed, possibly sparse,
/// [`CalculatedData`].
#[derive(Debug, Clone)]
pub struct ConceptDispatcher {
    flotation: FlotationSizer,
    clarifier: ClarifierSizer,
    chemical: ChemicalDosageEstimator,
    compliance: ComplianceChecker,
    biological: BiologicalLoadEstimator,
}

impl ConceptDispatcher {
    pub fn new(table: Arc<ParameterTable>) -> Self {
        Self {
            flotation: FlotationSizer::new(table.clone()),
            clarifier: ClarifierSizer::new(table.clone()),
            chemical: ChemicalDosageEstimator::new(table.clone()),
            compliance: ComplianceChecker::new(table.clone()),
            biological: BiologicalLoadEstimator::new(table),
        }
    }

    /// Builds the typed request and dispatches it.
    pub fn calculate(&self, focus: &ConceptFocus, inputs: &RawInputs) -> CalculatedData {
        self.dispatch(&CalculationRequest::from_raw(focus, inputs))
    }

    pub fn dispatch(&self, request: &CalculationRequest) -> CalculatedData {
        match request {
            CalculationRequest::Sizing { site, primary } => CalculatedData {
                chemical_dosage: Some(self.chemical.estimate(
                    site.flow_rate_m3_hr,
                    site.tss_mg_l,
                    &site.industry,
                    *primary,
                )),
                ..self.both_sizings(site)
            },
            CalculationRequest::ChemicalDosing { site, technology } => CalculatedData {
                chemical_dosage: Some(self.chemical.estimate(
                    site.flow_rate_m3_hr,
                    site.tss_mg_l,
                    &site.industry,
                    *technology,
                )),
                ..self.both_sizings(site)
            },
            CalculationRequest::Compliance {
                industry,
                measurements,
            } => CalculatedData {
                compliance_status: Some(self.compliance.check(industry, measurements)),
                ..Default::default()
            },
            CalculationRequest::BiologicalLoad { site, cod_mg_l } => {
                let load = self
                    .biological
                    .estimate(site.flow_rate_m3_hr, *cod_mg_l, &site.industry);
                CalculatedData {
                    biological_load: Some(BiologicalLoadOutcome::from(load)),
                    ..self.both_sizings(site)
                }
            }
            CalculationRequest::Troubleshooting { problem, context } => CalculatedData {
                troubleshooting_tips: Some(troubleshooting_tips(*problem, *context)),
                ..Default::default()
            },
            CalculationRequest::Fallback { site } => self.both_sizings(site),
        }
    }

    fn both_sizings(&self, site: &SiteInputs) -> CalculatedData {
        CalculatedData {
            daf_specs: Some(
                self.flotation
                    .size(site.flow_rate_m3_hr, site.tss_mg_l, &site.industry),
            ),
            clarifier_specs: Some(self.clarifier.size(site.flow_rate_m3_hr, &site.industry)),
            ..Default::default()
        }
    }
}
