//! Data Transfer Objects for report HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ReportId;
use crate::domain::report::ReportError;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response after generating a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportResponse {
    #[serde(rename = "reportId")]
    pub report_id: String,
}

impl From<ReportId> for GenerateReportResponse {
    fn from(id: ReportId) -> Self {
        Self {
            report_id: id.to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&ReportError> for ErrorResponse {
    fn from(err: &ReportError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_response_uses_camel_case_key() {
        let id = ReportId::new();
        let json = serde_json::to_value(GenerateReportResponse::from(id)).unwrap();
        assert_eq!(json["reportId"], id.to_string());
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_string(&ErrorResponse::bad_request("nope")).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn report_error_maps_code_and_message() {
        let response = ErrorResponse::from(&ReportError::missing_concept_focus());
        assert_eq!(response.code, "MISSING_FIELD");
        assert_eq!(response.message, "Missing required field: conceptFocus");
    }
}
