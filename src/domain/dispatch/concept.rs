//! Concept focus - which calculation a landing page asks for.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The calculation a request is focused on.
///
/// Unknown values are kept verbatim in `Unrecognized` so they can be stored
/// and logged; they are never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConceptFocus {
    DafSizing,
    ClarifierSizing,
    DafClarifierComparison,
    FogTreatment,
    LowDensitySolids,
    HighDensitySolids,
    ChemicalDosing,
    EmulsionBreaking,
    RegulatoryCheck,
    BiologicalLoadEstimation,
    Troubleshooting,
    Unrecognized(String),
}

static RECOGNIZED: [ConceptFocus; 11] = [
    ConceptFocus::DafSizing,
    ConceptFocus::ClarifierSizing,
    ConceptFocus::DafClarifierComparison,
    ConceptFocus::FogTreatment,
    ConceptFocus::LowDensitySolids,
    ConceptFocus::HighDensitySolids,
    ConceptFocus::ChemicalDosing,
    ConceptFocus::EmulsionBreaking,
    ConceptFocus::RegulatoryCheck,
    ConceptFocus::BiologicalLoadEstimation,
    ConceptFocus::Troubleshooting,
];

impl ConceptFocus {
    /// Every concept with its own dispatch rule.
    pub fn recognized() -> &'static [ConceptFocus] {
        &RECOGNIZED
    }

    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        Self::recognized()
            .iter()
            .find(|focus| focus.as_str() == value)
            .cloned()
            .unwrap_or_else(|| ConceptFocus::Unrecognized(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConceptFocus::DafSizing => "daf_sizing",
            ConceptFocus::ClarifierSizing => "clarifier_sizing",
            ConceptFocus::DafClarifierComparison => "daf_clarifier_comparison",
            ConceptFocus::FogTreatment => "fog_treatment",
            ConceptFocus::LowDensitySolids => "low_density_solids",
            ConceptFocus::HighDensitySolids => "high_density_solids",
            ConceptFocus::ChemicalDosing => "chemical_dosing",
            ConceptFocus::EmulsionBreaking => "emulsion_breaking",
            ConceptFocus::RegulatoryCheck => "regulatory_check",
            ConceptFocus::BiologicalLoadEstimation => "biological_load_estimation",
            ConceptFocus::Troubleshooting => "troubleshooting",
            ConceptFocus::Unrecognized(value) => value,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ConceptFocus::Unrecognized(_))
    }

    /// Whether a missing industry is worth a warning for this concept.
    pub fn expects_industry(&self) -> bool {
        !matches!(
            self,
            ConceptFocus::RegulatoryCheck | ConceptFocus::Troubleshooting
        )
    }
}

impl FromStr for ConceptFocus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for ConceptFocus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ConceptFocus> for String {
    fn from(focus: ConceptFocus) -> Self {
        focus.as_str().to_string()
    }
}

impl fmt::Display for ConceptFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
