//! Report repository port.
//!
//! Defines the contract for persisting and retrieving Report aggregates.
//! Reports are write-once: there is no update operation.

use crate::domain::foundation::{DomainError, ReportId};
use crate::domain::report::Report;
use async_trait::async_trait;

/// Repository port for Report persistence.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Save a new report.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, report: &Report) -> Result<(), DomainError>;

    /// Find a report by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ReportId) -> Result<Option<Report>, DomainError>;

    /// Check if a report exists.
    async fn exists(&self, id: &ReportId) -> Result<bool, DomainError>;
}
