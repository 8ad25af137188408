//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST endpoints
//! - `storage` - Report repositories (in-memory, file)

pub mod http;
pub mod storage;

pub use http::{report_router, ReportAppState};
pub use storage::{FileReportRepository, InMemoryReportRepository};
