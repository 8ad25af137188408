//! Raw input bag and its coercion rules.
//!
//! Landing-page forms post a flat JSON object. Numeric fields may arrive as
//! numbers or numeric strings. For the process fields (flow, TSS, COD, dose)
//! zero, blank and non-numeric values count as absent; measurements keep zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::ValidationError;

use super::ConceptFocus;

pub const CONCEPT_FOCUS_KEY: &str = "conceptFocus";
pub const INDUSTRY_KEY: &str = "industry";
pub const CONTAMINANT_TYPE_KEY: &str = "contaminant_type";
pub const FLOW_RATE_KEY: &str = "flow_rate_m3_hr";
pub const TSS_KEY: &str = "tss_mg_l";
pub const COD_KEY: &str = "cod_mg_l";
pub const CURRENT_COD_DOSE_KEY: &str = "current_cod_dose";
pub const PROBLEM_TYPE_KEY: &str = "problem_type";
pub const TECHNOLOGY_CONTEXT_KEY: &str = "technology_context";

/// Numeric fields coerced before storage.
const COERCED_NUMERIC_KEYS: [&str; 4] = [FLOW_RATE_KEY, TSS_KEY, COD_KEY, CURRENT_COD_DOSE_KEY];

/// Routing fields that are not stored among the process parameters.
const ROUTING_KEYS: [&str; 4] = [
    CONCEPT_FOCUS_KEY,
    INDUSTRY_KEY,
    PROBLEM_TYPE_KEY,
    TECHNOLOGY_CONTEXT_KEY,
];

/// The loosely-typed request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInputs(Map<String, Value>);

impl RawInputs {
    /// Accepts only JSON objects.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ValidationError::invalid_format(
                "body",
                "expected a JSON object",
            )),
        }
    }

    /// Non-zero finite number from a JSON number or numeric string.
    pub fn number(&self, key: &str) -> Option<f64> {
        coerce_number(self.0.get(key)?)
    }

    /// Non-blank string value.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// `None` when the field is missing or blank.
    pub fn concept_focus(&self) -> Option<ConceptFocus> {
        self.text(CONCEPT_FOCUS_KEY).map(ConceptFocus::parse)
    }

    pub fn industry(&self) -> Option<&str> {
        self.text(INDUSTRY_KEY)
    }

    pub fn contaminant_type(&self) -> Option<&str> {
        self.text(CONTAMINANT_TYPE_KEY)
    }

    pub fn flow_rate_m3_hr(&self) -> Option<f64> {
        self.number(FLOW_RATE_KEY)
    }

    pub fn tss_mg_l(&self) -> Option<f64> {
        self.number(TSS_KEY)
    }

    pub fn cod_mg_l(&self) -> Option<f64> {
        self.number(COD_KEY)
    }

    /// Every numeric-valued field, keyed in lower case, for compliance checks.
    ///
    /// A zero reading is a measurement, not an absent one.
    pub fn measurements(&self) -> BTreeMap<String, f64> {
        self.0
            .iter()
            .filter_map(|(key, value)| parse_number(value).map(|n| (key.to_lowercase(), n)))
            .collect()
    }

    /// Process parameters as stored with a report.
    ///
    /// Routing fields are dropped, the recognised numeric fields are coerced
    /// (and dropped when absent), nulls are dropped, and everything else
    /// passes through unchanged.
    pub fn input_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        for (key, value) in &self.0 {
            if ROUTING_KEYS.contains(&key.as_str()) || value.is_null() {
                continue;
            }
            if COERCED_NUMERIC_KEYS.contains(&key.as_str()) {
                if let Some(number) = coerce_number(value).and_then(serde_json::Number::from_f64) {
                    params.insert(key.clone(), Value::Number(number));
                }
                continue;
            }
            params.insert(key.clone(), value.clone());
        }
        params
    }
}

/// Finite number from a JSON number or numeric string.
fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn coerce_number(value: &Value) -> Option<f64> {
    parse_number(value).filter(|n| *n != 0.0)
}
