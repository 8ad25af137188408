//! Built-in industry coefficients.
//!
//! Budgetary (Class 4) values in ZAR. The CAPEX bands reproduce the
//! 0.85 / 1.30 spread around typical cost that earlier calculators applied.

use std::collections::BTreeMap;

use super::profile::{
    ClarifierParameters, CostBand, CostParameters, DafParameters, IndustryProfile, OpexRates,
    RegulatoryLimits, TechnologyCosts,
};

pub const FOOD_BEVERAGE: &str = "food_beverage";
pub const MEAT_PROCESSING: &str = "meat_processing";
pub const DAIRY_PROCESSING: &str = "dairy_processing";
pub const MINING_BENEFICIATION: &str = "mining_beneficiation";

const DAF_CAPEX: CostBand = CostBand {
    min: 42_500.0,
    typical: 50_000.0,
    max: 65_000.0,
};

const CLARIFIER_CAPEX: CostBand = CostBand {
    min: 34_000.0,
    typical: 40_000.0,
    max: 52_000.0,
};

const DAF_OPEX: OpexRates = OpexRates {
    power: 1.10,
    chemical: 1.50,
    sludge: 0.65,
    maintenance: 0.03,
};

const CLARIFIER_OPEX: OpexRates = OpexRates {
    power: 0.45,
    chemical: 1.20,
    sludge: 0.90,
    maintenance: 0.02,
};

/// Municipal sewer discharge limits (typical by-law values).
fn municipal_limits() -> RegulatoryLimits {
    RegulatoryLimits {
        ceilings: BTreeMap::from([
            ("tss_mg_l".to_string(), 1_000.0),
            ("cod_mg_l".to_string(), 5_000.0),
            ("fog_mg_l".to_string(), 400.0),
            ("sulphate_mg_l".to_string(), 1_500.0),
        ]),
        ph_min: Some(5.5),
        ph_max: Some(12.0),
    }
}

/// General limits for discharge to a water resource.
fn water_resource_limits() -> RegulatoryLimits {
    RegulatoryLimits {
        ceilings: BTreeMap::from([
            ("tss_mg_l".to_string(), 25.0),
            ("cod_mg_l".to_string(), 75.0),
            ("fog_mg_l".to_string(), 2.5),
            ("sulphate_mg_l".to_string(), 500.0),
        ]),
        ph_min: Some(5.5),
        ph_max: Some(9.5),
    }
}

fn costs(daf_opex: OpexRates, clarifier_opex: OpexRates) -> CostParameters {
    CostParameters {
        daf: TechnologyCosts {
            capex_per_m2: DAF_CAPEX,
            opex: daf_opex,
        },
        clarifier: TechnologyCosts {
            capex_per_m2: CLARIFIER_CAPEX,
            opex: clarifier_opex,
        },
    }
}

fn daf(hlr: f64, slr: f64, dose_base: f64, tss_factor: f64) -> DafParameters {
    DafParameters {
        hydraulic_loading_rate: hlr,
        solids_loading_rate: slr,
        chem_dose_base: dose_base,
        chem_dose_tss_factor: tss_factor,
    }
}

fn clarifier(sor: f64, dose_base: f64, tss_factor: f64) -> ClarifierParameters {
    ClarifierParameters {
        surface_overflow_rate: sor,
        chem_dose_base: dose_base,
        chem_dose_tss_factor: tss_factor,
    }
}

pub(super) fn default_profile() -> IndustryProfile {
    IndustryProfile {
        daf: daf(8.0, 8.0, 40.0, 0.04),
        clarifier: clarifier(24.0, 10.0, 0.02),
        costs: costs(DAF_OPEX, CLARIFIER_OPEX),
        limits: municipal_limits(),
        bod_cod_ratio: 0.5,
    }
}

pub(super) fn industry_profiles() -> BTreeMap<String, IndustryProfile> {
    let mut profiles = BTreeMap::new();

    profiles.insert(
        FOOD_BEVERAGE.to_string(),
        IndustryProfile {
            daf: daf(8.0, 8.0, 40.0, 0.04),
            clarifier: clarifier(24.0, 10.0, 0.02),
            costs: costs(DAF_OPEX, CLARIFIER_OPEX),
            limits: municipal_limits(),
            bod_cod_ratio: 0.6,
        },
    );

    // Blood and fat loads make sedimentation impractical.
    profiles.insert(
        MEAT_PROCESSING.to_string(),
        IndustryProfile {
            daf: daf(6.0, 15.0, 60.0, 0.05),
            clarifier: ClarifierParameters::default(),
            costs: costs(
                OpexRates {
                    sludge: 0.85,
                    ..DAF_OPEX
                },
                CLARIFIER_OPEX,
            ),
            limits: municipal_limits(),
            bod_cod_ratio: 0.5,
        },
    );

    profiles.insert(
        DAIRY_PROCESSING.to_string(),
        IndustryProfile {
            daf: daf(7.0, 6.0, 50.0, 0.05),
            clarifier: clarifier(24.0, 12.0, 0.02),
            costs: costs(
                OpexRates {
                    chemical: 1.80,
                    ..DAF_OPEX
                },
                CLARIFIER_OPEX,
            ),
            limits: municipal_limits(),
            bod_cod_ratio: 0.6,
        },
    );

    // Dense mineral solids do not float.
    profiles.insert(
        MINING_BENEFICIATION.to_string(),
        IndustryProfile {
            daf: DafParameters::default(),
            clarifier: clarifier(20.0, 5.0, 0.015),
            costs: costs(
                DAF_OPEX,
                OpexRates {
                    chemical: 0.90,
                    sludge: 1.20,
                    ..CLARIFIER_OPEX
                },
            ),
            limits: water_resource_limits(),
            bod_cod_ratio: 0.3,
        },
    );

    profiles
}
