//! Dissolved air flotation sizing.
//!
//! The unit must satisfy both the hydraulic loading rate (total flow
//! including recycle) and the solids loading rate, so the governing area is
//! whichever constraint demands more.

use std::sync::Arc;

use crate::domain::parameters::{DafParameters, ParameterTable, Technology};

use super::costing::{price, SizingResult};
use super::estimate::{positive_input, Estimate, NotApplicableReason};

/// Pressurised recycle as a fraction of influent flow.
pub const RECYCLE_RATIO: f64 = 0.3;

/// Areas demanded by each loading constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingAreas {
    pub hydraulic_m2: f64,
    pub solids_m2: f64,
}

impl LoadingAreas {
    /// Computes both areas for a flotation unit.
    pub fn compute(flow_rate_m3_hr: f64, tss_mg_l: f64, daf: &DafParameters) -> Self {
        let total_flow = flow_rate_m3_hr * (1.0 + RECYCLE_RATIO);
        let hydraulic_m2 = if daf.hydraulic_loading_rate > 0.0 {
            total_flow / daf.hydraulic_loading_rate
        } else {
            0.0
        };

        let solids_load_kg_hr = flow_rate_m3_hr * tss_mg_l / 1000.0;
        let solids_m2 = if solids_load_kg_hr > 0.0 && daf.solids_loading_rate > 0.0 {
            solids_load_kg_hr / daf.solids_loading_rate
        } else {
            0.0
        };

        Self {
            hydraulic_m2,
            solids_m2,
        }
    }

    /// Area satisfying both constraints.
    ///
    /// When one constraint yields zero the other one governs by construction.
    pub fn governing_area(&self) -> f64 {
        self.hydraulic_m2.max(self.solids_m2)
    }
}

/// Flotation sizing calculator.
#[derive(Debug, Clone)]
pub struct FlotationSizer {
    table: Arc<ParameterTable>,
}

impl FlotationSizer {
    pub fn new(table: Arc<ParameterTable>) -> Self {
        Self { table }
    }

    /// Sizes and prices a DAF unit.
    ///
    /// Returns `NotApplicable` when the industry profile excludes flotation
    /// or when flow or TSS is absent or not positive.
    pub fn size(
        &self,
        flow_rate_m3_hr: Option<f64>,
        tss_mg_l: Option<f64>,
        industry: &str,
    ) -> Estimate<SizingResult> {
        let profile = self.table.lookup(industry);
        if !profile.daf.is_applicable() {
            return Estimate::NotApplicable(NotApplicableReason::technology(
                Technology::Daf,
                industry,
            ));
        }

        let Some(flow) = positive_input(flow_rate_m3_hr) else {
            return Estimate::NotApplicable(NotApplicableReason::missing("flow_rate_m3_hr"));
        };
        let Some(tss) = positive_input(tss_mg_l) else {
            return Estimate::NotApplicable(NotApplicableReason::missing("tss_mg_l"));
        };

        let areas = LoadingAreas::compute(flow, tss, &profile.daf);
        Estimate::Applicable(price(areas.governing_area(), flow, &profile.costs.daf))
    }
}
