//! Typed calculation requests built from the raw input bag.
//!
//! Each variant carries only the fields its calculators read.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::estimators::{ProblemType, TechnologyContext};
use crate::domain::parameters::{Technology, DEFAULT_INDUSTRY};

use super::inputs::{PROBLEM_TYPE_KEY, TECHNOLOGY_CONTEXT_KEY};
use super::{ConceptFocus, RawInputs};

/// Settling behaviour of the dominant contaminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContaminantType {
    #[serde(rename = "High-Density")]
    HighDensity,
    #[serde(rename = "Low-Density")]
    LowDensity,
}

impl ContaminantType {
    pub fn from_input(value: Option<&str>) -> Option<Self> {
        match value.map(str::trim) {
            Some("High-Density") => Some(ContaminantType::HighDensity),
            Some("Low-Density") => Some(ContaminantType::LowDensity),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContaminantType::HighDensity => "High-Density",
            ContaminantType::LowDensity => "Low-Density",
        }
    }

    /// Dense solids settle; everything else is floated.
    pub fn primary_technology(contaminant: Option<Self>) -> Technology {
        match contaminant {
            Some(ContaminantType::HighDensity) => Technology::Clarifier,
            Some(ContaminantType::LowDensity) | None => Technology::Daf,
        }
    }
}

/// Site inputs shared by the sizing-type requests.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteInputs {
    pub industry: String,
    pub flow_rate_m3_hr: Option<f64>,
    pub tss_mg_l: Option<f64>,
}

impl SiteInputs {
    fn from_raw(inputs: &RawInputs) -> Self {
        Self {
            industry: industry_or_default(inputs),
            flow_rate_m3_hr: inputs.flow_rate_m3_hr(),
            tss_mg_l: inputs.tss_mg_l(),
        }
    }
}

/// A concept-specific calculation request.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationRequest {
    /// Both sizings plus dosage for the primary technology.
    Sizing {
        site: SiteInputs,
        primary: Technology,
    },
    /// Dosage for the inferred technology plus both sizings.
    ChemicalDosing {
        site: SiteInputs,
        technology: Technology,
    },
    Compliance {
        industry: String,
        measurements: BTreeMap<String, f64>,
    },
    /// Load estimate plus both sizings.
    BiologicalLoad {
        site: SiteInputs,
        cod_mg_l: Option<f64>,
    },
    Troubleshooting {
        problem: ProblemType,
        context: TechnologyContext,
    },
    /// Both sizings only.
    Fallback { site: SiteInputs },
}

impl CalculationRequest {
    pub fn from_raw(focus: &ConceptFocus, inputs: &RawInputs) -> Self {
        let primary = ContaminantType::primary_technology(ContaminantType::from_input(
            inputs.contaminant_type(),
        ));

        match focus {
            ConceptFocus::DafSizing
            | ConceptFocus::ClarifierSizing
            | ConceptFocus::DafClarifierComparison
            | ConceptFocus::FogTreatment
            | ConceptFocus::LowDensitySolids
            | ConceptFocus::HighDensitySolids => CalculationRequest::Sizing {
                site: SiteInputs::from_raw(inputs),
                primary,
            },
            ConceptFocus::ChemicalDosing | ConceptFocus::EmulsionBreaking => {
                CalculationRequest::ChemicalDosing {
                    site: SiteInputs::from_raw(inputs),
                    technology: primary,
                }
            }
            ConceptFocus::RegulatoryCheck => CalculationRequest::Compliance {
                industry: industry_or_default(inputs),
                measurements: inputs.measurements(),
            },
            ConceptFocus::BiologicalLoadEstimation => CalculationRequest::BiologicalLoad {
                site: SiteInputs::from_raw(inputs),
                cod_mg_l: inputs.cod_mg_l(),
            },
            ConceptFocus::Troubleshooting => CalculationRequest::Troubleshooting {
                problem: ProblemType::from_input(inputs.text(PROBLEM_TYPE_KEY)),
                context: TechnologyContext::from_input(inputs.text(TECHNOLOGY_CONTEXT_KEY)),
            },
            ConceptFocus::Unrecognized(_) => CalculationRequest::Fallback {
                site: SiteInputs::from_raw(inputs),
            },
        }
    }
}

fn industry_or_default(inputs: &RawInputs) -> String {
    inputs.industry().unwrap_or(DEFAULT_INDUSTRY).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawInputs {
        RawInputs::from_value(value).unwrap()
    }

    #[test]
    fn high_density_contaminant_selects_clarifier() {
        let inputs = raw(json!({ "contaminant_type": "High-Density", "flow_rate_m3_hr": 20 }));
        match CalculationRequest::from_raw(&ConceptFocus::HighDensitySolids, &inputs) {
            CalculationRequest::Sizing { primary, site } => {
                assert_eq!(primary, Technology::Clarifier);
                assert_eq!(site.flow_rate_m3_hr, Some(20.0));
                assert_eq!(site.industry, DEFAULT_INDUSTRY);
            }
            other => panic!("expected Sizing, got {:?}", other),
        }
    }

    #[test]
    fn other_contaminants_select_flotation() {
        assert_eq!(ContaminantType::primary_technology(None), Technology::Daf);
        assert_eq!(
            ContaminantType::primary_technology(ContaminantType::from_input(Some("Low-Density"))),
            Technology::Daf
        );
        assert_eq!(ContaminantType::from_input(Some("sludge")), None);
    }

    #[test]
    fn compliance_request_collects_measurements() {
        let inputs = raw(json!({ "industry": "dairy_processing", "cod_mg_l": 900, "ph": 6.5 }));
        match CalculationRequest::from_raw(&ConceptFocus::RegulatoryCheck, &inputs) {
            CalculationRequest::Compliance {
                industry,
                measurements,
            } => {
                assert_eq!(industry, "dairy_processing");
                assert_eq!(measurements.len(), 2);
            }
            other => panic!("expected Compliance, got {:?}", other),
        }
    }

    #[test]
    fn troubleshooting_request_parses_problem_and_context() {
        let inputs = raw(json!({ "problem_type": "floating_sludge", "technology_context": "clarifier" }));
        assert_eq!(
            CalculationRequest::from_raw(&ConceptFocus::Troubleshooting, &inputs),
            CalculationRequest::Troubleshooting {
                problem: ProblemType::FloatingSludge,
                context: TechnologyContext::Clarifier,
            }
        );
    }

    #[test]
    fn unrecognized_concept_falls_back() {
        let focus = ConceptFocus::parse("lagoon_design");
        let request = CalculationRequest::from_raw(&focus, &raw(json!({})));
        assert!(matches!(request, CalculationRequest::Fallback { .. }));
    }
}
