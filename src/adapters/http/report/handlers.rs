//! HTTP handlers for report endpoints.
//!
//! These handlers connect Axum routes to the report command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::{info, warn};

use crate::application::handlers::report::{
    GenerateReportCommand, GenerateReportHandler, GetReportHandler, GetReportQuery,
};
use crate::domain::dispatch::{ConceptDispatcher, RawInputs};
use crate::domain::foundation::ReportId;
use crate::domain::report::ReportError;
use crate::ports::ReportRepository;

use super::dto::{ErrorResponse, GenerateReportResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct ReportAppState {
    pub repository: Arc<dyn ReportRepository>,
    pub dispatcher: Arc<ConceptDispatcher>,
}

impl ReportAppState {
    pub fn new(repository: Arc<dyn ReportRepository>, dispatcher: Arc<ConceptDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub fn generate_report_handler(&self) -> GenerateReportHandler {
        GenerateReportHandler::new(self.repository.clone(), self.dispatcher.clone())
    }

    pub fn get_report_handler(&self) -> GetReportHandler {
        GetReportHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/report/generate - Calculate and store a report
pub async fn generate_report(
    State(state): State<ReportAppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ReportApiError> {
    let Json(body) = body.map_err(|rejection| ReportApiError::BadRequest(rejection.body_text()))?;
    let inputs = RawInputs::from_value(body)
        .map_err(|err| ReportApiError::BadRequest(err.to_string()))?;

    let handler = state.generate_report_handler();
    let result = handler.handle(GenerateReportCommand { inputs }).await?;

    info!(
        report_id = %result.report_id,
        concept_focus = %result.report.concept_focus(),
        created_at = %result.report.created_at(),
        "Report generated"
    );

    Ok((
        StatusCode::OK,
        Json(GenerateReportResponse::from(result.report_id)),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/report/:id - Get a stored report with its economics
pub async fn get_report(
    State(state): State<ReportAppState>,
    Path(report_id): Path<String>,
) -> Result<impl IntoResponse, ReportApiError> {
    let report_id: ReportId = report_id
        .parse()
        .map_err(|_| ReportApiError::BadRequest(format!("Invalid report id: {}", report_id)))?;

    let handler = state.get_report_handler();
    let view = handler.handle(GetReportQuery { report_id }).await?;

    Ok((StatusCode::OK, Json(view)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts to HTTP responses.
#[derive(Debug)]
pub enum ReportApiError {
    BadRequest(String),
    Report(ReportError),
}

impl From<ReportError> for ReportApiError {
    fn from(err: ReportError) -> Self {
        ReportApiError::Report(err)
    }
}

impl IntoResponse for ReportApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ReportApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ReportApiError::Report(err) => {
                let status = match &err {
                    ReportError::MissingConceptFocus | ReportError::InvalidRequest(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    ReportError::NotFound(_) => StatusCode::NOT_FOUND,
                    ReportError::Storage(msg) => {
                        warn!(error = %msg, "Report storage failure");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, ErrorResponse::from(&err))
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_concept_focus_is_bad_request() {
        let response = ReportApiError::from(ReportError::missing_concept_focus()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ReportApiError::from(ReportError::not_found(ReportId::new())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_maps_to_500() {
        let response = ReportApiError::from(ReportError::storage("disk full")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = ReportApiError::BadRequest("not an object".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
