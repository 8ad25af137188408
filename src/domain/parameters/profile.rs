//! Per-industry design coefficients.
//!
//! A zero hydraulic loading rate (flotation) or surface overflow rate
//! (sedimentation) marks the technology as not applicable to the industry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::ValidationError;

use super::Technology;

/// BOD/COD ratio used when a profile does not specify one.
pub const DEFAULT_BOD_COD_RATIO: f64 = 0.5;

/// Flotation design coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DafParameters {
    /// m³/m²/hr
    pub hydraulic_loading_rate: f64,
    /// kg/m²/hr
    pub solids_loading_rate: f64,
    /// mg/L
    pub chem_dose_base: f64,
    pub chem_dose_tss_factor: f64,
}

impl DafParameters {
    pub fn is_applicable(&self) -> bool {
        self.hydraulic_loading_rate > 0.0
    }
}

/// Gravity settling design coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClarifierParameters {
    /// m³/m²/day
    pub surface_overflow_rate: f64,
    /// mg/L
    pub chem_dose_base: f64,
    pub chem_dose_tss_factor: f64,
}

impl ClarifierParameters {
    pub fn is_applicable(&self) -> bool {
        self.surface_overflow_rate > 0.0
    }
}

/// Linear coagulant/flocculant demand model: `base + tss_factor * TSS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoseCoefficients {
    pub base_mg_l: f64,
    pub tss_factor: f64,
}

/// CAPEX band in ZAR per m² of surface area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBand {
    pub min: f64,
    pub typical: f64,
    pub max: f64,
}

/// Operating cost rates.
///
/// `power`, `chemical` and `sludge` are ZAR per m³ treated; `maintenance` is
/// an annual fraction of typical CAPEX.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpexRates {
    pub power: f64,
    pub chemical: f64,
    pub sludge: f64,
    pub maintenance: f64,
}

impl OpexRates {
    /// Sum of the volume-proportional rates, ZAR/m³.
    pub fn volumetric(&self) -> f64 {
        self.power + self.chemical + self.sludge
    }
}

/// Cost coefficients for one technology.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TechnologyCosts {
    pub capex_per_m2: CostBand,
    #[serde(default)]
    pub opex: OpexRates,
}

/// Cost coefficients for both technologies.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostParameters {
    pub daf: TechnologyCosts,
    pub clarifier: TechnologyCosts,
}

impl CostParameters {
    pub fn for_technology(&self, technology: Technology) -> &TechnologyCosts {
        match technology {
            Technology::Daf => &self.daf,
            Technology::Clarifier => &self.clarifier,
        }
    }
}

/// Discharge limits.
///
/// `ceilings` is keyed by the measured parameter name as it appears in the
/// input bag (`tss_mg_l`, `cod_mg_l`, ...). pH is checked as a range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulatoryLimits {
    pub ceilings: BTreeMap<String, f64>,
    pub ph_min: Option<f64>,
    pub ph_max: Option<f64>,
}

impl RegulatoryLimits {
    pub fn ceiling(&self, parameter: &str) -> Option<f64> {
        self.ceilings.get(parameter).copied()
    }

    /// Both pH bounds, when the profile defines a range.
    pub fn ph_range(&self) -> Option<(f64, f64)> {
        match (self.ph_min, self.ph_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }
}

fn default_bod_cod_ratio() -> f64 {
    DEFAULT_BOD_COD_RATIO
}

/// Complete design profile for one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    #[serde(default)]
    pub daf: DafParameters,
    #[serde(default)]
    pub clarifier: ClarifierParameters,
    #[serde(default)]
    pub costs: CostParameters,
    #[serde(default)]
    pub limits: RegulatoryLimits,
    #[serde(default = "default_bod_cod_ratio")]
    pub bod_cod_ratio: f64,
}

impl IndustryProfile {
    /// Dose model for the given technology.
    pub fn dose_coefficients(&self, technology: Technology) -> DoseCoefficients {
        match technology {
            Technology::Daf => DoseCoefficients {
                base_mg_l: self.daf.chem_dose_base,
                tss_factor: self.daf.chem_dose_tss_factor,
            },
            Technology::Clarifier => DoseCoefficients {
                base_mg_l: self.clarifier.chem_dose_base,
                tss_factor: self.clarifier.chem_dose_tss_factor,
            },
        }
    }

    pub fn is_applicable(&self, technology: Technology) -> bool {
        match technology {
            Technology::Daf => self.daf.is_applicable(),
            Technology::Clarifier => self.clarifier.is_applicable(),
        }
    }

    /// Checks that every coefficient is usable.
    ///
    /// Negative rates, inverted CAPEX bands and inverted pH ranges are
    /// rejected so that sizing results are never negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let scalars = [
            ("daf.hydraulic_loading_rate", self.daf.hydraulic_loading_rate),
            ("daf.solids_loading_rate", self.daf.solids_loading_rate),
            ("daf.chem_dose_base", self.daf.chem_dose_base),
            ("daf.chem_dose_tss_factor", self.daf.chem_dose_tss_factor),
            ("clarifier.surface_overflow_rate", self.clarifier.surface_overflow_rate),
            ("clarifier.chem_dose_base", self.clarifier.chem_dose_base),
            ("clarifier.chem_dose_tss_factor", self.clarifier.chem_dose_tss_factor),
            ("bod_cod_ratio", self.bod_cod_ratio),
        ];
        for (field, value) in scalars {
            check_non_negative(field, value)?;
        }

        for technology in Technology::all() {
            let costs = self.costs.for_technology(*technology);
            let prefix = format!("costs.{}", technology.as_str());
            let band = costs.capex_per_m2;
            check_non_negative(&format!("{}.capex_per_m2.min", prefix), band.min)?;
            if band.min > band.typical || band.typical > band.max {
                return Err(ValidationError::invalid_format(
                    format!("{}.capex_per_m2", prefix),
                    "expected min <= typical <= max",
                ));
            }
            let opex = costs.opex;
            check_non_negative(&format!("{}.opex.power", prefix), opex.power)?;
            check_non_negative(&format!("{}.opex.chemical", prefix), opex.chemical)?;
            check_non_negative(&format!("{}.opex.sludge", prefix), opex.sludge)?;
            check_non_negative(&format!("{}.opex.maintenance", prefix), opex.maintenance)?;
        }

        for (parameter, limit) in &self.limits.ceilings {
            check_non_negative(&format!("limits.{}", parameter), *limit)?;
        }
        if let Some((min, max)) = self.limits.ph_range() {
            if min > max {
                return Err(ValidationError::inverted_range("limits.ph", min, max));
            }
        }

        Ok(())
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value < 0.0 || value.is_nan() {
        return Err(ValidationError::negative(field, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> IndustryProfile {
        IndustryProfile {
            daf: DafParameters {
                hydraulic_loading_rate: 8.0,
                solids_loading_rate: 8.0,
                chem_dose_base: 40.0,
                chem_dose_tss_factor: 0.04,
            },
            clarifier: ClarifierParameters {
                surface_overflow_rate: 24.0,
                chem_dose_base: 10.0,
                chem_dose_tss_factor: 0.02,
            },
            costs: CostParameters {
                daf: TechnologyCosts {
                    capex_per_m2: CostBand {
                        min: 42_500.0,
                        typical: 50_000.0,
                        max: 65_000.0,
                    },
                    opex: OpexRates {
                        power: 1.1,
                        chemical: 1.5,
                        sludge: 0.65,
                        maintenance: 0.03,
                    },
                },
                clarifier: TechnologyCosts::default(),
            },
            limits: RegulatoryLimits::default(),
            bod_cod_ratio: 0.5,
        }
    }

    #[test]
    fn zero_rates_mark_technology_not_applicable() {
        let mut profile = sample_profile();
        assert!(profile.is_applicable(Technology::Daf));
        assert!(profile.is_applicable(Technology::Clarifier));

        profile.daf.hydraulic_loading_rate = 0.0;
        profile.clarifier.surface_overflow_rate = 0.0;
        assert!(!profile.is_applicable(Technology::Daf));
        assert!(!profile.is_applicable(Technology::Clarifier));
    }

    #[test]
    fn dose_coefficients_follow_technology() {
        let profile = sample_profile();
        assert_eq!(profile.dose_coefficients(Technology::Daf).base_mg_l, 40.0);
        assert_eq!(profile.dose_coefficients(Technology::Clarifier).tss_factor, 0.02);
    }

    #[test]
    fn volumetric_opex_excludes_maintenance() {
        let rates = sample_profile().costs.daf.opex;
        assert!((rates.volumetric() - 3.25).abs() < 1e-12);
    }

    #[test]
    fn valid_profile_passes_validation() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn negative_rate_is_rejected() {
        let mut profile = sample_profile();
        profile.daf.solids_loading_rate = -1.0;
        assert_eq!(
            profile.validate(),
            Err(ValidationError::negative("daf.solids_loading_rate", -1.0))
        );
    }

    #[test]
    fn inverted_capex_band_is_rejected() {
        let mut profile = sample_profile();
        profile.costs.daf.capex_per_m2.min = 70_000.0;
        assert!(matches!(
            profile.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn inverted_ph_range_is_rejected() {
        let mut profile = sample_profile();
        profile.limits.ph_min = Some(9.0);
        profile.limits.ph_max = Some(6.0);
        assert_eq!(
            profile.validate(),
            Err(ValidationError::inverted_range("limits.ph", 9.0, 6.0))
        );
    }

    #[test]
    fn missing_sections_deserialize_as_not_applicable() {
        let yaml = "costs:\n  daf:\n    capex_per_m2: { min: 1.0, typical: 2.0, max: 3.0 }\n";
        let profile: IndustryProfile = serde_yaml::from_str(yaml).unwrap();
        assert!(!profile.is_applicable(Technology::Daf));
        assert!(!profile.is_applicable(Technology::Clarifier));
        assert_eq!(profile.bod_cod_ratio, DEFAULT_BOD_COD_RATIO);
    }
}
