//! Report-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ReportId};

/// Report errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Request body had no usable `conceptFocus`.
    MissingConceptFocus,
    /// Request body was not usable at all.
    InvalidRequest(String),
    /// Report was not found.
    NotFound(ReportId),
    /// Storage failure.
    Storage(String),
}

impl ReportError {
    pub fn missing_concept_focus() -> Self {
        ReportError::MissingConceptFocus
    }
    pub fn not_found(id: ReportId) -> Self {
        ReportError::NotFound(id)
    }
    pub fn storage(message: impl Into<String>) -> Self {
        ReportError::Storage(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportError::MissingConceptFocus => ErrorCode::MissingField,
            ReportError::InvalidRequest(_) => ErrorCode::ValidationFailed,
            ReportError::NotFound(_) => ErrorCode::ReportNotFound,
            ReportError::Storage(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ReportError::MissingConceptFocus => {
                "Missing required field: conceptFocus".to_string()
            }
            ReportError::InvalidRequest(msg) => format!("Invalid request: {}", msg),
            ReportError::NotFound(id) => format!("Report not found: {}", id),
            ReportError::Storage(msg) => format!("Failed to generate report: {}", msg),
        }
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReportError {}

impl From<DomainError> for ReportError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::MissingField => {
                ReportError::InvalidRequest(err.message)
            }
            _ => ReportError::Storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_concept_focus_message_is_stable() {
        let err = ReportError::missing_concept_focus();
        assert_eq!(err.to_string(), "Missing required field: conceptFocus");
        assert_eq!(err.code(), ErrorCode::MissingField);
    }

    #[test]
    fn not_found_names_the_report() {
        let id = ReportId::new();
        let err = ReportError::not_found(id);
        assert!(err.message().contains(&id.to_string()));
        assert_eq!(err.code(), ErrorCode::ReportNotFound);
    }

    #[test]
    fn storage_domain_errors_map_to_storage() {
        let err: ReportError = DomainError::storage("disk full").into();
        assert!(matches!(err, ReportError::Storage(_)));
        assert_eq!(err.code(), ErrorCode::StorageError);
    }

    #[test]
    fn validation_domain_errors_map_to_invalid_request() {
        let err: ReportError =
            DomainError::new(ErrorCode::ValidationFailed, "bad body").into();
        assert_eq!(err, ReportError::InvalidRequest("bad body".to_string()));
    }
}
