//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types used across the
//! sizing engine and the report layer.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ReportId;
pub use timestamp::Timestamp;
