//! Gravity clarifier sizing by surface overflow rate.

use std::sync::Arc;

use crate::domain::parameters::{ParameterTable, Technology};

use super::costing::{price, SizingResult, HOURS_PER_DAY};
use super::estimate::{positive_input, Estimate, NotApplicableReason};

/// Sedimentation sizing calculator.
#[derive(Debug, Clone)]
pub struct ClarifierSizer {
    table: Arc<ParameterTable>,
}

impl ClarifierSizer {
    pub fn new(table: Arc<ParameterTable>) -> Self {
        Self { table }
    }

    /// Sizes and prices a clarifier: `area = daily flow / SOR`.
    pub fn size(&self, flow_rate_m3_hr: Option<f64>, industry: &str) -> Estimate<SizingResult> {
        let profile = self.table.lookup(industry);
        if !profile.clarifier.is_applicable() {
            return Estimate::NotApplicable(NotApplicableReason::technology(
                Technology::Clarifier,
                industry,
            ));
        }

        let Some(flow) = positive_input(flow_rate_m3_hr) else {
            return Estimate::NotApplicable(NotApplicableReason::missing("flow_rate_m3_hr"));
        };

        let daily_flow_m3 = flow * HOURS_PER_DAY;
        let area = daily_flow_m3 / profile.clarifier.surface_overflow_rate;
        Estimate::Applicable(price(area, flow, &profile.costs.clarifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::{
        DEFAULT_INDUSTRY, MEAT_PROCESSING, MINING_BENEFICIATION,
    };

    fn sizer() -> ClarifierSizer {
        ClarifierSizer::new(Arc::new(ParameterTable::builtin()))
    }

    #[test]
    fn default_profile_sizes_one_square_metre_per_m3_hr() {
        let result = sizer().size(Some(50.0), DEFAULT_INDUSTRY);
        assert_eq!(result.applicable().unwrap().surface_area_m2, 50.0);
    }

    #[test]
    fn mining_profile_uses_lower_overflow_rate() {
        // 50 * 24 / 20
        let result = sizer().size(Some(50.0), MINING_BENEFICIATION);
        assert_eq!(result.applicable().unwrap().surface_area_m2, 60.0);
    }

    #[test]
    fn meat_processing_excludes_clarifier() {
        let result = sizer().size(Some(50.0), MEAT_PROCESSING);
        assert_eq!(
            result,
            Estimate::NotApplicable(NotApplicableReason::technology(
                Technology::Clarifier,
                MEAT_PROCESSING
            ))
        );
    }

    #[test]
    fn exclusion_is_reported_before_missing_flow() {
        let result = sizer().size(None, MEAT_PROCESSING);
        assert!(matches!(
            result.reason(),
            Some(NotApplicableReason::TechnologyNotApplicable { .. })
        ));
    }

    #[test]
    fn missing_flow_is_not_applicable() {
        let result = sizer().size(None, DEFAULT_INDUSTRY);
        assert_eq!(
            result.reason(),
            Some(&NotApplicableReason::missing("flow_rate_m3_hr"))
        );
    }

    #[test]
    fn capex_band_brackets_typical_cost() {
        let result = *sizer().size(Some(50.0), DEFAULT_INDUSTRY).applicable().unwrap();
        assert_eq!(result.capex_min_zar, 50.0 * 34_000.0);
        assert_eq!(result.capex_max_zar, 50.0 * 52_000.0);
        assert!(result.opex_annual_zar > 0.0);
    }
}
