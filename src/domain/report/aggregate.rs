//! Report aggregate.
//!
//! A report is the durable record of one calculation: the inputs as
//! received (after coercion) and the calculated data. Reports are never
//! modified after creation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::dispatch::{CalculatedData, ConceptFocus, RawInputs};
use crate::domain::foundation::{ReportId, Timestamp};

/// Stored calculation record.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `input_params` never contains routing fields (`conceptFocus`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    id: ReportId,
    concept_focus: ConceptFocus,
    industry: Option<String>,
    contaminant_type: Option<String>,
    flow_rate_m3_hr: Option<f64>,
    tss_mg_l: Option<f64>,
    input_params: Map<String, Value>,
    calculated_data: CalculatedData,
    created_at: Timestamp,
}

impl Report {
    /// Creates a report from a finished calculation.
    pub fn new(
        id: ReportId,
        concept_focus: ConceptFocus,
        inputs: &RawInputs,
        calculated_data: CalculatedData,
    ) -> Self {
        Self {
            id,
            concept_focus,
            industry: inputs.industry().map(str::to_string),
            contaminant_type: inputs.contaminant_type().map(str::to_string),
            flow_rate_m3_hr: inputs.flow_rate_m3_hr(),
            tss_mg_l: inputs.tss_mg_l(),
            input_params: inputs.input_params(),
            calculated_data,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &ReportId {
        &self.id
    }

    pub fn concept_focus(&self) -> &ConceptFocus {
        &self.concept_focus
    }

    /// Industry as submitted; `None` when the form did not send one.
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    pub fn contaminant_type(&self) -> Option<&str> {
        self.contaminant_type.as_deref()
    }

    pub fn flow_rate_m3_hr(&self) -> Option<f64> {
        self.flow_rate_m3_hr
    }

    pub fn tss_mg_l(&self) -> Option<f64> {
        self.tss_mg_l
    }

    pub fn input_params(&self) -> &Map<String, Value> {
        &self.input_params
    }

    pub fn calculated_data(&self) -> &CalculatedData {
        &self.calculated_data
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
