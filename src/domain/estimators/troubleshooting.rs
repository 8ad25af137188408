//! Troubleshooting Advisor.
//!
//! A static decision table from (problem, technology context) to an ordered
//! list of remediation tips. There is no inference over free-form details.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Tip returned when no rule matches.
pub const GENERIC_TIP: &str =
    "Review plant operating data and consult a process engineer for a site-specific assessment.";

/// Observed operating problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    HighTss,
    HighFog,
    PoorFloat,
    SludgeCarryover,
    RisingSludge,
    HighChemicalCost,
    SludgeBlanketHigh,
    SludgeBlanketLow,
    FloatingSludge,
    ShortCircuiting,
    Other,
}

impl ProblemType {
    /// Parses an input value; unknown or absent values map to `Other`.
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("high_tss") => ProblemType::HighTss,
            Some("high_fog") => ProblemType::HighFog,
            Some("poor_float") => ProblemType::PoorFloat,
            Some("sludge_carryover") => ProblemType::SludgeCarryover,
            Some("rising_sludge") => ProblemType::RisingSludge,
            Some("high_chemical_cost") => ProblemType::HighChemicalCost,
            Some("sludge_blanket_high") => ProblemType::SludgeBlanketHigh,
            Some("sludge_blanket_low") => ProblemType::SludgeBlanketLow,
            Some("floating_sludge") => ProblemType::FloatingSludge,
            Some("short_circuiting") => ProblemType::ShortCircuiting,
            _ => ProblemType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::HighTss => "high_tss",
            ProblemType::HighFog => "high_fog",
            ProblemType::PoorFloat => "poor_float",
            ProblemType::SludgeCarryover => "sludge_carryover",
            ProblemType::RisingSludge => "rising_sludge",
            ProblemType::HighChemicalCost => "high_chemical_cost",
            ProblemType::SludgeBlanketHigh => "sludge_blanket_high",
            ProblemType::SludgeBlanketLow => "sludge_blanket_low",
            ProblemType::FloatingSludge => "floating_sludge",
            ProblemType::ShortCircuiting => "short_circuiting",
            ProblemType::Other => "other",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Equipment the problem was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnologyContext {
    Daf,
    Clarifier,
    General,
}

impl TechnologyContext {
    /// Parses an input value; anything but `daf`/`clarifier` is `General`.
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("daf") => TechnologyContext::Daf,
            Some("clarifier") => TechnologyContext::Clarifier,
            _ => TechnologyContext::General,
        }
    }
}

type Rule = (ProblemType, TechnologyContext);

static DECISION_TABLE: Lazy<HashMap<Rule, &'static [&'static str]>> = Lazy::new(|| {
    use ProblemType::*;
    use TechnologyContext::*;

    let rules: [(Rule, &'static [&'static str]); 14] = [
        (
            (HighTss, Daf),
            &[
                "Check coagulant and flocculant dosing against a jar test at current TSS.",
                "Verify saturator pressure and recycle flow; poor bubble generation leaves solids unfloated.",
                "Confirm the hydraulic loading rate is within design; reduce influent flow if overloaded.",
                "Inspect the skimmer speed and float blanket depth.",
            ],
        ),
        (
            (HighTss, Clarifier),
            &[
                "Pin floc or cloudy effluent usually indicates under-dosed flocculant; re-run jar tests.",
                "Compare actual surface overflow rate with design; peak flows can wash out solids.",
                "Check the sludge blanket depth and increase withdrawal if it is close to the weirs.",
                "Look for short-circuiting at the inlet baffle and uneven weir levels.",
            ],
        ),
        (
            (HighTss, General),
            &[
                "Measure influent TSS and flow to confirm the unit is within its design load.",
                "Jar test the current coagulant and flocculant programme.",
                "Check for upstream process changes such as new products or washdown schedules.",
            ],
        ),
        (
            (HighFog, Daf),
            &[
                "Adjust pH into the coagulant's working range before the flotation cell.",
                "Consider an emulsion breaker if FOG is mechanically or chemically emulsified.",
                "Increase recycle ratio to supply more air for the oil load.",
            ],
        ),
        (
            (HighFog, General),
            &[
                "Install or service a grease trap or primary oil separator upstream.",
                "Keep wash water temperatures down where possible; hot water carries emulsified fat.",
                "Dissolved air flotation is the usual treatment step for high FOG loads.",
            ],
        ),
        (
            (PoorFloat, Daf),
            &[
                "Check saturator pressure, air supply and recycle pump performance.",
                "Inspect pressure release valves for blockage; bubbles should be fine and milky.",
                "Verify flocculant dose; fragile floc breaks up before it reaches the surface.",
            ],
        ),
        (
            (SludgeCarryover, Daf),
            &[
                "Increase skimmer frequency so the float blanket does not slough into the outlet.",
                "Check the underflow weir level setting.",
            ],
        ),
        (
            (SludgeCarryover, Clarifier),
            &[
                "Increase sludge withdrawal rate to lower the blanket.",
                "Check for hydraulic overload against the design surface overflow rate.",
            ],
        ),
        (
            (RisingSludge, Clarifier),
            &[
                "Rising clumps often mean denitrification in the blanket; shorten sludge retention.",
                "Increase desludging frequency, especially in warm weather.",
            ],
        ),
        (
            (HighChemicalCost, General),
            &[
                "Run jar tests to find the minimum effective dose at current influent quality.",
                "Dose proportionally to flow rather than at a fixed rate.",
                "Review pH control; operating at the optimal pH reduces coagulant demand.",
                "Compare chemical suppliers and product concentrations on a cost-per-kg-active basis.",
            ],
        ),
        (
            (SludgeBlanketHigh, Clarifier),
            &[
                "Increase underflow pumping rate or frequency.",
                "Check the underflow line and pump for blockages.",
                "Confirm the solids load has not increased beyond the thickening capacity.",
            ],
        ),
        (
            (SludgeBlanketLow, Clarifier),
            &[
                "Reduce underflow pumping rate; rat-holing draws thin sludge and water.",
                "Check the rake drive and torque for uneven sludge distribution.",
            ],
        ),
        (
            (FloatingSludge, Clarifier),
            &[
                "Septic sludge releases gas; increase desludging frequency.",
                "Check that the scum baffle and skimmer are working.",
                "Look for FOG in the influent; fats should be removed upstream by flotation.",
            ],
        ),
        (
            (ShortCircuiting, Clarifier),
            &[
                "Level the effluent weirs so overflow is even around the perimeter.",
                "Inspect the inlet well and energy-dissipating baffle.",
                "Check for temperature or density currents; a dye test confirms the flow path.",
            ],
        ),
    ];

    rules.into_iter().collect()
});

/// Selects tips for a problem.
///
/// A rule registered for `General` applies to any context that lacks its own
/// rule for the same problem.
pub fn troubleshooting_tips(problem: ProblemType, context: TechnologyContext) -> Vec<String> {
    DECISION_TABLE
        .get(&(problem, context))
        .or_else(|| DECISION_TABLE.get(&(problem, TechnologyContext::General)))
        .map(|tips| tips.iter().map(|tip| tip.to_string()).collect())
        .unwrap_or_else(|| vec![GENERIC_TIP.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_rule_wins_over_general() {
        let daf = troubleshooting_tips(ProblemType::HighTss, TechnologyContext::Daf);
        let general = troubleshooting_tips(ProblemType::HighTss, TechnologyContext::General);
        assert_ne!(daf, general);
        assert!(daf[0].contains("jar test"));
    }

    #[test]
    fn general_rule_covers_missing_context() {
        let clarifier = troubleshooting_tips(ProblemType::HighChemicalCost, TechnologyContext::Clarifier);
        let general = troubleshooting_tips(ProblemType::HighChemicalCost, TechnologyContext::General);
        assert_eq!(clarifier, general);
    }

    #[test]
    fn unmatched_problem_returns_single_generic_tip() {
        let tips = troubleshooting_tips(ProblemType::Other, TechnologyContext::Daf);
        assert_eq!(tips, vec![GENERIC_TIP.to_string()]);

        let tips = troubleshooting_tips(ProblemType::RisingSludge, TechnologyContext::Daf);
        assert_eq!(tips, vec![GENERIC_TIP.to_string()]);
    }

    #[test]
    fn tips_keep_table_order() {
        let tips = troubleshooting_tips(ProblemType::ShortCircuiting, TechnologyContext::Clarifier);
        assert_eq!(tips.len(), 3);
        assert!(tips[0].starts_with("Level the effluent weirs"));
    }

    #[test]
    fn parses_inputs_with_fallbacks() {
        assert_eq!(ProblemType::from_input(Some("high_fog")), ProblemType::HighFog);
        assert_eq!(ProblemType::from_input(Some("smelly")), ProblemType::Other);
        assert_eq!(ProblemType::from_input(None), ProblemType::Other);
        assert_eq!(TechnologyContext::from_input(Some("clarifier")), TechnologyContext::Clarifier);
        assert_eq!(TechnologyContext::from_input(Some("lagoon")), TechnologyContext::General);
    }

    #[test]
    fn every_problem_type_round_trips_through_input() {
        for problem in [
            ProblemType::HighTss,
            ProblemType::HighFog,
            ProblemType::PoorFloat,
            ProblemType::SludgeCarryover,
            ProblemType::RisingSludge,
            ProblemType::HighChemicalCost,
            ProblemType::SludgeBlanketHigh,
            ProblemType::SludgeBlanketLow,
            ProblemType::FloatingSludge,
            ProblemType::ShortCircuiting,
        ] {
            assert_eq!(ProblemType::from_input(Some(problem.as_str())), problem);
        }
    }
}
