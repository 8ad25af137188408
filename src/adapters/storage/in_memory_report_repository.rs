//! In-Memory Report Repository
//!
//! Stores reports in memory. Used for development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ReportId};
use crate::domain::report::Report;
use crate::ports::ReportRepository;

/// In-memory storage for reports
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportRepository {
    reports: Arc<RwLock<HashMap<ReportId, Report>>>,
}

impl InMemoryReportRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored reports (useful for tests)
    pub async fn clear(&self) {
        self.reports.write().await.clear();
    }

    /// Get the number of stored reports
    pub async fn report_count(&self) -> usize {
        self.reports.read().await.len()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn save(&self, report: &Report) -> Result<(), DomainError> {
        let mut reports = self.reports.write().await;
        reports.insert(*report.id(), report.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ReportId) -> Result<Option<Report>, DomainError> {
        let reports = self.reports.read().await;
        Ok(reports.get(id).cloned())
    }

    async fn exists(&self, id: &ReportId) -> Result<bool, DomainError> {
        let reports = self.reports.read().await;
        Ok(reports.contains_key(id))
    }
}
