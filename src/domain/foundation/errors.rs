//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must not be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Field '{field}' has an inverted range: {min} > {max}")]
    InvertedRange { field: String, min: f64, max: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a negative value validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates an inverted range validation error.
    pub fn inverted_range(field: impl Into<String>, min: f64, max: f64) -> Self {
        ValidationError::InvertedRange {
            field: field.into(),
            min,
            max,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    MissingField,

    // Not found errors
    ReportNotFound,

    // Infrastructure errors
    StorageError,
    SerializationError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::ReportNotFound => "REPORT_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a storage error, the usual failure of a repository adapter.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_negative_displays_correctly() {
        let err = ValidationError::negative("daf.hydraulic_loading_rate", -2.0);
        assert_eq!(
            format!("{}", err),
            "Field 'daf.hydraulic_loading_rate' must not be negative, got -2"
        );
    }

    #[test]
    fn validation_error_inverted_range_displays_correctly() {
        let err = ValidationError::inverted_range("limits.ph", 9.0, 6.0);
        assert_eq!(
            format!("{}", err),
            "Field 'limits.ph' has an inverted range: 9 > 6"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ReportNotFound, "Report not found");
        assert_eq!(format!("{}", err), "[REPORT_NOT_FOUND] Report not found");
    }

    #[test]
    fn storage_helper_sets_code() {
        let err = DomainError::storage("disk full");
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::storage("write failed").with_detail("path", "/tmp/x.json");
        assert_eq!(err.details.get("path"), Some(&"/tmp/x.json".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ReportNotFound), "REPORT_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::SerializationError), "SERIALIZATION_ERROR");
    }
}
