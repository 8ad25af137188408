//! GetReportHandler - Query handler for reading a stored report.

use std::sync::Arc;

use crate::domain::foundation::ReportId;
use crate::domain::report::{ReportError, ReportView};
use crate::ports::ReportRepository;

/// Query to get a report by ID.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub report_id: ReportId,
}

/// Handler for retrieving a report with its display economics.
pub struct GetReportHandler {
    repository: Arc<dyn ReportRepository>,
}

impl GetReportHandler {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetReportQuery) -> Result<ReportView, ReportError> {
        let report = self
            .repository
            .find_by_id(&query.report_id)
            .await?
            .ok_or_else(|| ReportError::not_found(query.report_id))?;

        Ok(ReportView::from(report))
    }
}
