//! Explicit applicability wrapper for calculator outputs.
//!
//! A calculator that cannot produce a figure (technology excluded for the
//! industry, or a required input absent) returns `NotApplicable` instead of
//! a zero-valued result. On the wire the estimate keeps the flat field layout
//! display consumers read (`surface_area_m2`, `dose_mg_l`, ...), zero-filled
//! when not applicable, plus an `applicable` flag and the `reason`.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::domain::parameters::Technology;

/// Why a calculator produced no figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotApplicableReason {
    /// The industry profile excludes the technology (zero loading rate).
    TechnologyNotApplicable {
        technology: Technology,
        industry: String,
    },
    /// A required input was absent or not positive.
    MissingInput { field: String },
}

impl NotApplicableReason {
    pub fn technology(technology: Technology, industry: impl Into<String>) -> Self {
        NotApplicableReason::TechnologyNotApplicable {
            technology,
            industry: industry.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        NotApplicableReason::MissingInput {
            field: field.into(),
        }
    }
}

/// Calculator output that is either a figure or an explicit "not applicable".
#[derive(Debug, Clone, PartialEq)]
pub enum Estimate<T> {
    Applicable(T),
    NotApplicable(NotApplicableReason),
}

impl<T> Estimate<T> {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Estimate::Applicable(_))
    }

    /// The figure, if one was produced.
    pub fn applicable(&self) -> Option<&T> {
        match self {
            Estimate::Applicable(value) => Some(value),
            Estimate::NotApplicable(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&NotApplicableReason> {
        match self {
            Estimate::Applicable(_) => None,
            Estimate::NotApplicable(reason) => Some(reason),
        }
    }
}

/// Keeps strictly positive, finite inputs; anything else counts as missing.
pub(crate) fn positive_input(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[derive(Serialize)]
struct EstimateView<'a, T> {
    #[serde(flatten)]
    values: &'a T,
    applicable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a NotApplicableReason>,
}

fn applicable_by_default() -> bool {
    true
}

#[derive(Deserialize)]
struct EstimateRecord<T> {
    #[serde(flatten)]
    values: T,
    #[serde(default = "applicable_by_default")]
    applicable: bool,
    #[serde(default)]
    reason: Option<NotApplicableReason>,
}

impl<T: Serialize + Default> Serialize for Estimate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Estimate::Applicable(values) => EstimateView {
                values,
                applicable: true,
                reason: None,
            }
            .serialize(serializer),
            Estimate::NotApplicable(reason) => {
                let zero = T::default();
                EstimateView {
                    values: &zero,
                    applicable: false,
                    reason: Some(reason),
                }
                .serialize(serializer)
            }
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Estimate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = EstimateRecord::<T>::deserialize(deserializer)?;
        if record.applicable {
            return Ok(Estimate::Applicable(record.values));
        }
        let reason = record
            .reason
            .unwrap_or_else(|| NotApplicableReason::missing("unknown"));
        Ok(Estimate::NotApplicable(reason))
    }
}
