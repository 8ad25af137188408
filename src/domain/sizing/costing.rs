//! CAPEX banding and the OPEX formula shared by both sizing calculators.

use serde::{Deserialize, Serialize};

use crate::domain::parameters::{OpexRates, TechnologyCosts};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Output of a single technology's sizing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizingResult {
    pub surface_area_m2: f64,
    pub capex_min_zar: f64,
    pub capex_max_zar: f64,
    pub opex_annual_zar: f64,
}

/// Volume treated per year at a constant flow.
pub fn annual_volume_m3(flow_rate_m3_hr: f64) -> f64 {
    flow_rate_m3_hr * HOURS_PER_DAY * DAYS_PER_YEAR
}

/// Annual OPEX in ZAR.
///
/// Volume-proportional part (power, chemicals, sludge) plus a maintenance
/// reserve proportional to typical CAPEX.
pub fn annual_opex(flow_rate_m3_hr: f64, capex_typical_zar: f64, rates: &OpexRates) -> f64 {
    annual_volume_m3(flow_rate_m3_hr) * rates.volumetric() + capex_typical_zar * rates.maintenance
}

/// Prices a sized surface area with the technology's cost coefficients.
pub fn price(surface_area_m2: f64, flow_rate_m3_hr: f64, costs: &TechnologyCosts) -> SizingResult {
    let band = costs.capex_per_m2;
    let capex_typical = surface_area_m2 * band.typical;

    SizingResult {
        surface_area_m2,
        capex_min_zar: surface_area_m2 * band.min,
        capex_max_zar: surface_area_m2 * band.max,
        opex_annual_zar: annual_opex(flow_rate_m3_hr, capex_typical, &costs.opex),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameters::CostBand;

    fn costs() -> TechnologyCosts {
        TechnologyCosts {
            capex_per_m2: CostBand {
                min: 800.0,
                typical: 1_000.0,
                max: 1_500.0,
            },
            opex: OpexRates {
                power: 1.0,
                chemical: 0.5,
                sludge: 0.5,
                maintenance: 0.1,
            },
        }
    }

    #[test]
    fn annual_volume_uses_fixed_year() {
        assert_eq!(annual_volume_m3(1.0), 8_760.0);
    }

    #[test]
    fn opex_adds_volume_and_maintenance_components() {
        // 8760 m³ * 2.0 ZAR/m³ + 10 000 * 0.1
        let opex = annual_opex(1.0, 10_000.0, &costs().opex);
        assert!((opex - 18_520.0).abs() < 1e-9);
    }

    #[test]
    fn price_uses_band_coefficients_directly() {
        let result = price(10.0, 1.0, &costs());
        assert_eq!(result.surface_area_m2, 10.0);
        assert_eq!(result.capex_min_zar, 8_000.0);
        assert_eq!(result.capex_max_zar, 15_000.0);
        assert!((result.opex_annual_zar - 18_520.0).abs() < 1e-9);
    }
}
