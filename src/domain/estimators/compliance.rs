//! Regulatory Compliance Checker.
//!
//! Compares measured effluent parameters with the industry's discharge
//! limits. A value equal to its limit is compliant.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::parameters::ParameterTable;

/// Measurement key checked against the pH range rather than a ceiling.
pub const PH_PARAMETER: &str = "ph";

/// Outcome for one measured parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComplianceCheck {
    Ceiling {
        value: f64,
        limit: f64,
        compliant: bool,
    },
    Range {
        value: f64,
        limit_min: f64,
        limit_max: f64,
        compliant: bool,
    },
}

impl ComplianceCheck {
    pub fn ceiling(value: f64, limit: f64) -> Self {
        ComplianceCheck::Ceiling {
            value,
            limit,
            compliant: value <= limit,
        }
    }

    pub fn range(value: f64, limit_min: f64, limit_max: f64) -> Self {
        ComplianceCheck::Range {
            value,
            limit_min,
            limit_max,
            compliant: limit_min <= value && value <= limit_max,
        }
    }

    pub fn is_compliant(&self) -> bool {
        match self {
            ComplianceCheck::Ceiling { compliant, .. } | ComplianceCheck::Range { compliant, .. } => {
                *compliant
            }
        }
    }
}

/// Per-parameter compliance, ordered by parameter name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplianceStatus(BTreeMap<String, ComplianceCheck>);

impl ComplianceStatus {
    pub fn get(&self, parameter: &str) -> Option<&ComplianceCheck> {
        self.0.get(parameter)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComplianceCheck)> {
        self.0.iter().map(|(name, check)| (name.as_str(), check))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every checked parameter is within its limit.
    ///
    /// Vacuously true when nothing could be checked.
    pub fn all_compliant(&self) -> bool {
        self.0.values().all(ComplianceCheck::is_compliant)
    }

    /// Names of parameters that exceed their limits.
    pub fn violations(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, check)| !check.is_compliant())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Checks measurements against an industry's discharge limits.
#[derive(Debug, Clone)]
pub struct ComplianceChecker {
    table: Arc<ParameterTable>,
}

impl ComplianceChecker {
    pub fn new(table: Arc<ParameterTable>) -> Self {
        Self { table }
    }

    /// Evaluates every measurement that has a matching limit.
    ///
    /// Measurements without a limit in the profile are omitted from the
    /// result rather than reported as unknown.
    pub fn check(&self, industry: &str, measurements: &BTreeMap<String, f64>) -> ComplianceStatus {
        let limits = &self.table.lookup(industry).limits;
        let mut status = BTreeMap::new();

        for (parameter, &value) in measurements {
            if !value.is_finite() {
                continue;
            }
            let check = if parameter == PH_PARAMETER {
                limits
                    .ph_range()
                    .map(|(min, max)| ComplianceCheck::range(value, min, max))
            } else {
                limits
                    .ceiling(parameter)
                    .map(|limit| ComplianceCheck::ceiling(value, limit))
            };
            if let Some(check) = check {
                status.insert(parameter.clone(), check);
            }
        }

        ComplianceStatus(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::{DEFAULT_INDUSTRY, MINING_BENEFICIATION};
    use serde_json::json;

    fn checker() -> ComplianceChecker {
        ComplianceChecker::new(Arc::new(ParameterTable::builtin()))
    }

    fn measurements(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn value_equal_to_limit_is_compliant() {
        let status = checker().check(DEFAULT_INDUSTRY, &measurements(&[("tss_mg_l", 1_000.0)]));
        assert!(status.get("tss_mg_l").unwrap().is_compliant());
    }

    #[test]
    fn value_one_above_limit_is_not_compliant() {
        let status = checker().check(DEFAULT_INDUSTRY, &measurements(&[("tss_mg_l", 1_001.0)]));
        assert!(!status.get("tss_mg_l").unwrap().is_compliant());
        assert_eq!(status.violations(), vec!["tss_mg_l"]);
    }

    #[test]
    fn ph_is_checked_against_range_inclusively() {
        let status = checker().check(
            MINING_BENEFICIATION,
            &measurements(&[("ph", 9.5)]),
        );
        assert_eq!(status.get("ph"), Some(&ComplianceCheck::range(9.5, 5.5, 9.5)));
        assert!(status.all_compliant());

        let acidic = checker().check(MINING_BENEFICIATION, &measurements(&[("ph", 4.0)]));
        assert!(!acidic.all_compliant());
    }

    #[test]
    fn parameters_without_limits_are_omitted() {
        let status = checker().check(
            DEFAULT_INDUSTRY,
            &measurements(&[("flow_rate_m3_hr", 50.0), ("cod_mg_l", 800.0)]),
        );
        assert_eq!(status.len(), 1);
        assert!(status.get("flow_rate_m3_hr").is_none());
    }

    #[test]
    fn limits_differ_by_industry() {
        let input = measurements(&[("cod_mg_l", 800.0)]);
        assert!(checker().check(DEFAULT_INDUSTRY, &input).all_compliant());
        assert!(!checker().check(MINING_BENEFICIATION, &input).all_compliant());
    }

    #[test]
    fn serializes_as_ordered_map_of_checks() {
        let status = checker().check(
            DEFAULT_INDUSTRY,
            &measurements(&[("tss_mg_l", 200.0), ("ph", 7.0)]),
        );
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(
            value,
            json!({
                "ph": { "value": 7.0, "limit_min": 5.5, "limit_max": 12.0, "compliant": true },
                "tss_mg_l": { "value": 200.0, "limit": 1000.0, "compliant": true }
            })
        );
    }

    #[test]
    fn deserializes_both_shapes() {
        let status: ComplianceStatus = serde_json::from_value(json!({
            "ph": { "value": 7.0, "limit_min": 5.5, "limit_max": 12.0, "compliant": true },
            "tss_mg_l": { "value": 2000.0, "limit": 1000.0, "compliant": false }
        }))
        .unwrap();
        assert!(matches!(status.get("ph"), Some(ComplianceCheck::Range { .. })));
        assert_eq!(status.violations(), vec!["tss_mg_l"]);
    }
}
