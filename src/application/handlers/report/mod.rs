//! Report command and query handlers.

mod generate_report;
mod get_report;

pub use generate_report::{GenerateReportCommand, GenerateReportHandler, GenerateReportResult};
pub use get_report::{GetReportHandler, GetReportQuery};
