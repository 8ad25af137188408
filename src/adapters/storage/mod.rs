//! Storage Adapters
//!
//! Implementations of the ReportRepository port.
//!
//! ## Available Adapters
//!
//! - **FileReportRepository** - Stores reports as JSON files on disk
//! - **InMemoryReportRepository** - Stores reports in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileReportRepository, InMemoryReportRepository};
//!
//! // Production: file-based storage
//! let repository = FileReportRepository::new("./data/reports");
//!
//! // Testing: in-memory storage
//! let repository = InMemoryReportRepository::new();
//! ```

mod file_report_repository;
mod in_memory_report_repository;

pub use file_report_repository::FileReportRepository;
pub use in_memory_report_repository::InMemoryReportRepository;
