//! File-based Report Repository
//!
//! Stores each report as a pretty-printed JSON file named after its id.
//! JSON keeps the stored `calculated_data` byte-compatible with what the
//! HTTP surface returns.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode, ReportId};
use crate::domain::report::Report;
use crate::ports::ReportRepository;

/// File-based storage for reports
#[derive(Debug, Clone)]
pub struct FileReportRepository {
    base_path: PathBuf,
}

impl FileReportRepository {
    /// Create a new file repository with a base directory
    ///
    /// The directory is created on first save.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a report
    fn report_file_path(&self, id: &ReportId) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            DomainError::storage(format!("Failed to create report directory: {}", e))
                .with_detail("path", self.base_path.display().to_string())
        })
    }
}

#[async_trait]
impl ReportRepository for FileReportRepository {
    async fn save(&self, report: &Report) -> Result<(), DomainError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string_pretty(report).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to serialize report: {}", e),
            )
        })?;

        let file_path = self.report_file_path(report.id());
        fs::write(&file_path, json).await.map_err(|e| {
            DomainError::storage(format!("Failed to write report: {}", e))
                .with_detail("path", file_path.display().to_string())
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ReportId) -> Result<Option<Report>, DomainError> {
        let file_path = self.report_file_path(id);

        if !fs::try_exists(&file_path).await.unwrap_or(false) {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).await.map_err(|e| {
            DomainError::storage(format!("Failed to read report: {}", e))
                .with_detail("path", file_path.display().to_string())
        })?;

        let report = serde_json::from_str(&json).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to parse report: {}", e),
            )
            .with_detail("path", file_path.display().to_string())
        })?;

        Ok(Some(report))
    }

    async fn exists(&self, id: &ReportId) -> Result<bool, DomainError> {
        fs::try_exists(self.report_file_path(id))
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check report: {}", e)))
    }
}
