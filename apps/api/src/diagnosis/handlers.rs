//! Axum route handlers for the diagnosis API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::diagnosis::form::FormData;
use crate::diagnosis::DiagnosisCategory;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DiagnoseResponse {
    pub analysis: String,
}

/// POST /api/diagnose/:category
///
/// Validates the category and the submitted report, then forwards the report
/// to the analysis provider and returns its text verbatim.
pub async fn handle_diagnose(
    State(state): State<AppState>,
    Path(category): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DiagnoseResponse>, AppError> {
    let category: DiagnosisCategory = category.parse()?;

    // A missing or unparseable body is treated the same as an empty form, so
    // the error stays on the JSON wire contract instead of axum's rejection.
    let Json(body) = body.map_err(|_| AppError::EmptyFormData)?;

    // The body must be a non-empty JSON object before any field is looked at.
    match &body {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(AppError::EmptyFormData),
    }

    let form: FormData = serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("Invalid form data: {e}")))?;

    let analysis = state.analysis.analyze(&form, category).await?;

    Ok(Json(DiagnoseResponse { analysis }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::analysis::AnalysisProvider;
    use crate::config::Config;
    use crate::routes::build_router;

    /// Always answers with the same text.
    struct FixedProvider(&'static str);

    #[async_trait]
    impl AnalysisProvider for FixedProvider {
        async fn analyze(
            &self,
            _form: &FormData,
            _category: DiagnosisCategory,
        ) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }
    }

    /// Always fails with the given classified error.
    struct FailingProvider(fn() -> AppError);

    #[async_trait]
    impl AnalysisProvider for FailingProvider {
        async fn analyze(
            &self,
            _form: &FormData,
            _category: DiagnosisCategory,
        ) -> Result<String, AppError> {
            Err((self.0)())
        }
    }

    fn test_router(provider: Arc<dyn AnalysisProvider>) -> axum::Router {
        build_router(AppState {
            analysis: provider,
            config: Config {
                gemini_api_key: "test-key".to_string(),
                static_dir: "static".into(),
                port: 8080,
                rust_log: "info".to_string(),
            },
        })
    }

    async fn post_json(
        router: axum::Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_successful_diagnosis_returns_analysis_verbatim() {
        let router = test_router(Arc::new(FixedProvider("X")));
        let (status, body) = post_json(
            router,
            "/api/diagnose/skin",
            json!({ "mainComplaint": "itchy belly" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "analysis": "X" }));
    }

    #[tokio::test]
    async fn test_digestive_category_is_routed() {
        let router = test_router(Arc::new(FixedProvider("ok")));
        let (status, body) = post_json(
            router,
            "/api/diagnose/digestive",
            json!({ "mainComplaint": "vomiting since yesterday" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "analysis": "ok" }));
    }

    #[tokio::test]
    async fn test_empty_object_body_is_400() {
        let router = test_router(Arc::new(FixedProvider("unused")));
        let (status, body) = post_json(router, "/api/diagnose/skin", json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Form data is required." }));
    }

    #[tokio::test]
    async fn test_missing_body_is_400_with_json_error() {
        let router = test_router(Arc::new(FixedProvider("unused")));
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/diagnose/skin")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Form data is required." }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_400_with_json_error() {
        let router = test_router(Arc::new(FixedProvider("unused")));
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/diagnose/digestive")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Form data is required." }));
    }

    #[tokio::test]
    async fn test_non_object_body_is_400() {
        let router = test_router(Arc::new(FixedProvider("unused")));
        let (status, body) = post_json(router, "/api/diagnose/digestive", json!([1, 2, 3])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Form data is required." }));
    }

    #[tokio::test]
    async fn test_unknown_category_is_404() {
        let router = test_router(Arc::new(FixedProvider("unused")));
        let (status, body) = post_json(
            router,
            "/api/diagnose/dental",
            json!({ "mainComplaint": "sore tooth" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not a valid diagnosis type." }));
    }

    #[tokio::test]
    async fn test_blocked_upstream_surfaces_reason() {
        let router = test_router(Arc::new(FailingProvider(|| AppError::ContentBlocked {
            reason: "SAFETY".to_string(),
        })));
        let (status, body) = post_json(
            router,
            "/api/diagnose/skin",
            json!({ "mainComplaint": "itchy" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("SAFETY"), "message was {message:?}");
    }

    #[tokio::test]
    async fn test_quota_exhaustion_is_429() {
        let router = test_router(Arc::new(FailingProvider(|| AppError::QuotaExceeded)));
        let (status, body) = post_json(
            router,
            "/api/diagnose/skin",
            json!({ "mainComplaint": "itchy" }),
        )
        .await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, json!({ "error": "API quota exceeded." }));
    }

    #[tokio::test]
    async fn test_non_string_field_value_is_400() {
        let router = test_router(Arc::new(FixedProvider("unused")));
        let (status, body) = post_json(
            router,
            "/api/diagnose/skin",
            json!({ "mainComplaint": { "nested": true } }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Validation error:"));
    }
}
