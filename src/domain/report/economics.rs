//! Report economics - recommendation, payback and unit cost for display.

use serde::{Deserialize, Serialize};

use crate::domain::dispatch::ContaminantType;
use crate::domain::parameters::{Technology, MINING_BENEFICIATION};
use crate::domain::sizing::{annual_volume_m3, SizingResult};

use super::Report;

/// Display economics for one technology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnologyEconomics {
    pub technology: Technology,
    pub surface_area_m2: f64,
    pub capex_min_zar: f64,
    pub capex_max_zar: f64,
    pub opex_annual_zar: f64,
    /// `capex_max / opex`; `None` without operating cost.
    pub payback_years: Option<f64>,
    /// OPEX per m³ treated; `None` without flow or operating cost.
    pub cost_per_m3_zar: Option<f64>,
}

impl TechnologyEconomics {
    pub fn from_sizing(
        technology: Technology,
        sizing: &SizingResult,
        flow_rate_m3_hr: Option<f64>,
    ) -> Self {
        let opex = sizing.opex_annual_zar;
        let payback_years = (opex > 0.0).then(|| sizing.capex_max_zar / opex);
        let cost_per_m3_zar = flow_rate_m3_hr
            .filter(|flow| *flow > 0.0 && opex > 0.0)
            .map(|flow| opex / annual_volume_m3(flow));

        Self {
            technology,
            surface_area_m2: sizing.surface_area_m2,
            capex_min_zar: sizing.capex_min_zar,
            capex_max_zar: sizing.capex_max_zar,
            opex_annual_zar: opex,
            payback_years,
            cost_per_m3_zar,
        }
    }
}

/// Recommendation and economics derived from a stored report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEconomics {
    pub recommended_technology: Technology,
    /// Present when the recommended technology has an applicable sizing.
    pub primary: Option<TechnologyEconomics>,
    pub alternative: Option<TechnologyEconomics>,
}

impl ReportEconomics {
    pub fn derive(report: &Report) -> Self {
        let recommended =
            recommended_technology(report.contaminant_type(), report.industry());
        let data = report.calculated_data();
        let economics_for = |technology: Technology| {
            data.sizing(technology)
                .and_then(|estimate| estimate.applicable())
                .filter(|sizing| sizing.surface_area_m2 > 0.0)
                .map(|sizing| {
                    TechnologyEconomics::from_sizing(technology, sizing, report.flow_rate_m3_hr())
                })
        };

        Self {
            recommended_technology: recommended,
            primary: economics_for(recommended),
            alternative: economics_for(recommended.alternative()),
        }
    }
}

/// Dense contaminants and mining sites get a clarifier; everything else DAF.
pub fn recommended_technology(contaminant_type: Option<&str>, industry: Option<&str>) -> Technology {
    if industry == Some(MINING_BENEFICIATION) {
        return Technology::Clarifier;
    }
    ContaminantType::primary_technology(ContaminantType::from_input(contaminant_type))
}

/// A report together with its display economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportView {
    pub report: Report,
    pub economics: ReportEconomics,
}

impl From<Report> for ReportView {
    fn from(report: Report) -> Self {
        let economics = ReportEconomics::derive(&report);
        Self { report, economics }
    }
}
