//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod report;

pub use report::{
    GenerateReportCommand, GenerateReportHandler, GenerateReportResult, GetReportHandler,
    GetReportQuery,
};
