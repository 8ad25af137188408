//! HTTP adapter for report endpoints.
//!
//! Exposes report generation and retrieval over REST.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, GenerateReportResponse};
pub use handlers::{generate_report, get_report, ReportApiError, ReportAppState};
pub use routes::report_router;
