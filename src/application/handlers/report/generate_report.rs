//! GenerateReportHandler - Command handler for calculating and storing a report.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::dispatch::{ConceptDispatcher, RawInputs};
use crate::domain::foundation::ReportId;
use crate::domain::report::{Report, ReportError};
use crate::ports::ReportRepository;

/// Command to calculate and store a report.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub inputs: RawInputs,
}

/// Result of successful report generation.
#[derive(Debug, Clone)]
pub struct GenerateReportResult {
    pub report_id: ReportId,
    pub report: Report,
}

/// Handler for generating reports.
pub struct GenerateReportHandler {
    repository: Arc<dyn ReportRepository>,
    dispatcher: Arc<ConceptDispatcher>,
}

impl GenerateReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>, dispatcher: Arc<ConceptDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateReportCommand,
    ) -> Result<GenerateReportResult, ReportError> {
        // 1. Concept focus is the only mandatory field
        let focus = cmd
            .inputs
            .concept_focus()
            .ok_or_else(ReportError::missing_concept_focus)?;

        if cmd.inputs.industry().is_none() && focus.expects_industry() {
            warn!(concept_focus = %focus, "Missing industry field, using default profile");
        }
        if !focus.is_recognized() {
            warn!(
                concept_focus = %focus,
                "Unknown conceptFocus, defaulting to DAF/Clarifier comparison"
            );
        }

        // 2. Calculate
        let calculated_data = self.dispatcher.calculate(&focus, &cmd.inputs);
        debug!(
            concept_focus = %focus,
            slots = ?calculated_data.populated_slots(),
            "Calculation complete"
        );
        if let Some(status) = &calculated_data.compliance_status {
            if !status.all_compliant() {
                info!(
                    concept_focus = %focus,
                    violations = ?status.violations(),
                    "Measurements exceed discharge limits"
                );
            }
        }

        // 3. Persist
        let report_id = ReportId::new();
        let report = Report::new(report_id, focus, &cmd.inputs, calculated_data);
        self.repository.save(&report).await.map_err(|err| {
            warn!(report_id = %report_id, error = %err, "Failed to store report");
            ReportError::storage(err.message)
        })?;

        Ok(GenerateReportResult { report_id, report })
    }
}
