//! Assembled calculation output.

use serde::{Deserialize, Serialize};

use crate::domain::estimators::{BiologicalLoadOutcome, ComplianceStatus, DosageEstimate};
use crate::domain::parameters::Technology;
use crate::domain::sizing::{Estimate, SizingResult};

/// Result slots filled by the dispatcher.
///
/// Slot names are read by display and PDF consumers; unfilled slots are
/// omitted from JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daf_specs: Option<Estimate<SizingResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarifier_specs: Option<Estimate<SizingResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_dosage: Option<DosageEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_status: Option<ComplianceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biological_load: Option<BiologicalLoadOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub troubleshooting_tips: Option<Vec<String>>,
}

impl CalculatedData {
    /// Sizing slot for a technology.
    pub fn sizing(&self, technology: Technology) -> Option<&Estimate<SizingResult>> {
        match technology {
            Technology::Daf => self.daf_specs.as_ref(),
            Technology::Clarifier => self.clarifier_specs.as_ref(),
        }
    }

    /// Wire names of the filled slots, in declaration order.
    pub fn populated_slots(&self) -> Vec<&'static str> {
        let slots = [
            ("dafSpecs", self.daf_specs.is_some()),
            ("clarifierSpecs", self.clarifier_specs.is_some()),
            ("chemicalDosage", self.chemical_dosage.is_some()),
            ("complianceStatus", self.compliance_status.is_some()),
            ("biologicalLoad", self.biological_load.is_some()),
            ("troubleshootingTips", self.troubleshooting_tips.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(name, filled)| filled.then_some(name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.populated_slots().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_data_serializes_as_empty_object() {
        let value = serde_json::to_value(CalculatedData::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn slots_use_camel_case_names() {
        let data = CalculatedData {
            troubleshooting_tips: Some(vec!["Check the weirs.".to_string()]),
            ..Default::default()
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value, json!({ "troubleshootingTips": ["Check the weirs."] }));
        assert_eq!(data.populated_slots(), vec!["troubleshootingTips"]);
    }

    #[test]
    fn sizing_slot_follows_technology() {
        let data = CalculatedData {
            clarifier_specs: Some(Estimate::Applicable(SizingResult {
                surface_area_m2: 50.0,
                ..Default::default()
            })),
            ..Default::default()
        };
        assert!(data.sizing(Technology::Daf).is_none());
        assert!(data.sizing(Technology::Clarifier).is_some());
    }

    #[test]
    fn deserializes_stored_record() {
        let data: CalculatedData = serde_json::from_value(json!({
            "dafSpecs": {
                "surface_area_m2": 8.125,
                "capex_min_zar": 1.0,
                "capex_max_zar": 2.0,
                "opex_annual_zar": 3.0,
                "applicable": true
            },
            "biologicalLoad": { "error": "Flow rate and COD required for this calculation." }
        }))
        .unwrap();

        assert_eq!(
            data.daf_specs.as_ref().and_then(|e| e.applicable()).map(|s| s.surface_area_m2),
            Some(8.125)
        );
        assert!(data.biological_load.unwrap().load().is_none());
    }
}
