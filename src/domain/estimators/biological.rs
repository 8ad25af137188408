//! Biological Load Estimator - daily COD mass and the BOD derived from it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::parameters::ParameterTable;
use crate::domain::sizing::{positive_input, HOURS_PER_DAY};

/// Message shown in place of figures when the load cannot be estimated.
pub const INSUFFICIENT_INPUTS_MESSAGE: &str = "Flow rate and COD required for this calculation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BiologicalLoadError {
    #[error("{}", INSUFFICIENT_INPUTS_MESSAGE)]
    InsufficientInputs,
}

/// Daily organic load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiologicalLoad {
    pub daily_cod_kg: f64,
    pub estimated_bod_kg: f64,
    pub bod_cod_ratio: f64,
}

/// Either a load estimate or the user-facing error sentinel.
///
/// Unlike the sizing results, a missing input here is surfaced as an explicit
/// message: a zero COD/BOD figure would read as a clean effluent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BiologicalLoadOutcome {
    Estimated(BiologicalLoad),
    Unavailable { error: String },
}

impl BiologicalLoadOutcome {
    pub fn load(&self) -> Option<&BiologicalLoad> {
        match self {
            BiologicalLoadOutcome::Estimated(load) => Some(load),
            BiologicalLoadOutcome::Unavailable { .. } => None,
        }
    }
}

impl From<Result<BiologicalLoad, BiologicalLoadError>> for BiologicalLoadOutcome {
    fn from(result: Result<BiologicalLoad, BiologicalLoadError>) -> Self {
        match result {
            Ok(load) => BiologicalLoadOutcome::Estimated(load),
            Err(err) => BiologicalLoadOutcome::Unavailable {
                error: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct BiologicalLoadEstimator {
    table: Arc<ParameterTable>,
}

impl BiologicalLoadEstimator {
    pub fn new(table: Arc<ParameterTable>) -> Self {
        Self { table }
    }

    /// `daily_cod_kg = flow * 24 * cod / 1e6`, BOD via the industry ratio.
    ///
    /// # Errors
    ///
    /// `InsufficientInputs` if flow or COD is absent or not positive.
    pub fn estimate(
        &self,
        flow_rate_m3_hr: Option<f64>,
        cod_mg_l: Option<f64>,
        industry: &str,
    ) -> Result<BiologicalLoad, BiologicalLoadError> {
        let (Some(flow), Some(cod)) = (positive_input(flow_rate_m3_hr), positive_input(cod_mg_l))
        else {
            return Err(BiologicalLoadError::InsufficientInputs);
        };

        let bod_cod_ratio = self.table.lookup(industry).bod_cod_ratio;
        let daily_cod_kg = flow * HOURS_PER_DAY * cod / 1e6;

        Ok(BiologicalLoad {
            daily_cod_kg,
            estimated_bod_kg: daily_cod_kg * bod_cod_ratio,
            bod_cod_ratio,
        })
    }
}
