//! Axum router configuration for report endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{generate_report, get_report, ReportAppState};

/// Create the report API router.
///
/// # Routes
///
/// - `POST /api/report/generate` - Calculate and store a report
/// - `GET /api/report/:id` - Get a stored report with its economics
pub fn report_router() -> Router<ReportAppState> {
    Router::new()
        .route("/api/report/generate", post(generate_report))
        .route("/api/report/:id", get(get_report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryReportRepository;
    use crate::domain::dispatch::ConceptDispatcher;
    use crate::domain::foundation::{DomainError, ReportId};
    use crate::domain::parameters::ParameterTable;
    use crate::domain::report::Report;
    use crate::ports::ReportRepository;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FailingReportRepository;

    #[async_trait]
    impl ReportRepository for FailingReportRepository {
        async fn save(&self, _report: &Report) -> Result<(), DomainError> {
            Err(DomainError::storage("Simulated save failure"))
        }

        async fn find_by_id(&self, _id: &ReportId) -> Result<Option<Report>, DomainError> {
            Ok(None)
        }

        async fn exists(&self, _id: &ReportId) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    fn state_with(repository: Arc<dyn ReportRepository>) -> ReportAppState {
        let dispatcher = Arc::new(ConceptDispatcher::new(Arc::new(ParameterTable::builtin())));
        ReportAppState::new(repository, dispatcher)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/report/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn generate_returns_report_id() {
        let repository = InMemoryReportRepository::new();
        let app = report_router().with_state(state_with(Arc::new(repository.clone())));

        let body = json!({
            "conceptFocus": "daf_sizing",
            "industry": "food_beverage",
            "flow_rate_m3_hr": 50,
            "tss_mg_l": 100
        });
        let response = app.oneshot(post_json(&body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        let id: ReportId = json["reportId"].as_str().unwrap().parse().unwrap();
        assert!(repository.exists(&id).await.unwrap());
    }

    #[tokio::test]
    async fn missing_concept_focus_is_400() {
        let app = report_router().with_state(state_with(Arc::new(InMemoryReportRepository::new())));

        let response = app
            .oneshot(post_json(r#"{"industry": "food_beverage"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Missing required field: conceptFocus");
        assert!(json["code"].is_string());
    }

    #[tokio::test]
    async fn non_object_body_is_400() {
        let app = report_router().with_state(state_with(Arc::new(InMemoryReportRepository::new())));

        let response = app.oneshot(post_json("[1, 2, 3]")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let app = report_router().with_state(state_with(Arc::new(InMemoryReportRepository::new())));

        let response = app.oneshot(post_json("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn storage_failure_is_500() {
        let app = report_router().with_state(state_with(Arc::new(FailingReportRepository)));

        let response = app
            .oneshot(post_json(r#"{"conceptFocus": "troubleshooting"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn get_unknown_report_is_404() {
        let app = report_router().with_state(state_with(Arc::new(InMemoryReportRepository::new())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/report/{}", ReportId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_malformed_id_is_400() {
        let app = report_router().with_state(state_with(Arc::new(InMemoryReportRepository::new())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/report/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
