use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure renders a flat `{"error": <message>}` JSON body; the message
/// is the wire contract with the frontend, so wording changes are breaking.
#[derive(Debug, Error)]
pub enum AppError {
    /// The `:category` path segment is not a known diagnosis category.
    #[error("Not a valid diagnosis type.")]
    InvalidCategory,

    /// Request body was missing, not an object, or an empty object.
    #[error("Form data is required.")]
    EmptyFormData,

    #[error("Validation error: {0}")]
    Validation(String),

    /// The upstream service refused to answer the prompt.
    #[error("Analysis request was blocked by content policy. Reason: {reason}")]
    ContentBlocked { reason: String },

    /// The upstream service returned no usable completion.
    #[error("AI failed to generate a valid analysis. (Finish Reason: {finish_reason})")]
    IncompleteGeneration { finish_reason: String },

    #[error("Server configuration error: {0}")]
    Configuration(String),

    #[error("API quota exceeded.")]
    QuotaExceeded,

    #[error("Could not connect to the AI analysis service.")]
    UpstreamUnreachable,

    #[error("AI analysis service failed: {0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidCategory => StatusCode::NOT_FOUND,
            AppError::EmptyFormData | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::ContentBlocked { .. }
            | AppError::IncompleteGeneration { .. }
            | AppError::Configuration(_)
            | AppError::UpstreamUnreachable
            | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!("request failed: {message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_is_404() {
        let response = AppError::InvalidCategory.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_empty_form_data_is_400() {
        let response = AppError::EmptyFormData.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_quota_exceeded_is_429() {
        let response = AppError::QuotaExceeded.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_upstream_failures_are_500() {
        for error in [
            AppError::ContentBlocked {
                reason: "SAFETY".to_string(),
            },
            AppError::IncompleteGeneration {
                finish_reason: "MAX_TOKENS".to_string(),
            },
            AppError::Configuration("missing key".to_string()),
            AppError::UpstreamUnreachable,
            AppError::Upstream("boom".to_string()),
        ] {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_content_blocked_message_carries_reason() {
        let error = AppError::ContentBlocked {
            reason: "SAFETY".to_string(),
        };
        assert!(error.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_empty_form_data_message_is_exact() {
        assert_eq!(AppError::EmptyFormData.to_string(), "Form data is required.");
    }
}
