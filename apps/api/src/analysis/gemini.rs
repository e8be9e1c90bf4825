//! Gemini-backed `AnalysisProvider`.
//!
//! One `generateContent` call per inbound request; no retries, no streaming.
//! A slow or failing upstream call directly slows or fails the request that
//! triggered it. Upstream failures are translated into the `AppError`
//! taxonomy here so the HTTP layer never parses Gemini's error strings.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::AnalysisProvider;
use crate::diagnosis::form::FormData;
use crate::diagnosis::prompt::{build_prompt, Language};
use crate::diagnosis::DiagnosisCategory;
use crate::errors::AppError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for all analysis calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-flash";
/// Normal completion marker in a candidate's `finishReason`.
const FINISH_STOP: &str = "STOP";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Thin client over the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: GEMINI_API_BASE.to_string(),
            api_key,
        }
    }

    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse, AppError> {
        let endpoint = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            MODEL
        );
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(classify_api_error(status.as_u16(), &message));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))
    }
}

#[async_trait]
impl AnalysisProvider for GeminiClient {
    async fn analyze(
        &self,
        form: &FormData,
        category: DiagnosisCategory,
    ) -> Result<String, AppError> {
        let language = form
            .user_language
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_default();

        let prompt = build_prompt(form, category, language);
        debug!(
            "built {} prompt ({} chars, answer language {})",
            category,
            prompt.len(),
            language.display_name()
        );

        let response = self.generate_content(&prompt).await?;
        let text = interpret(response)?;

        debug!("analysis succeeded ({} chars)", text.len());
        Ok(text)
    }
}

/// Maps a completed upstream response to text or a classified failure.
fn interpret(response: GenerateContentResponse) -> Result<String, AppError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(AppError::ContentBlocked { reason });
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(AppError::IncompleteGeneration {
            finish_reason: "Unknown".to_string(),
        });
    };

    match candidate.finish_reason.as_deref() {
        Some(FINISH_STOP) => {}
        other => {
            return Err(AppError::IncompleteGeneration {
                finish_reason: other.unwrap_or("Unknown").to_string(),
            })
        }
    }

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AppError::IncompleteGeneration {
            finish_reason: "Empty content".to_string(),
        });
    }

    Ok(text)
}

fn classify_transport_error(error: reqwest::Error) -> AppError {
    if error.is_connect() || error.is_timeout() {
        AppError::UpstreamUnreachable
    } else {
        AppError::Upstream(error.to_string())
    }
}

/// Classifies a non-success upstream status by its message wording, so the
/// HTTP layer can pick status codes without knowing Gemini's error strings.
fn classify_api_error(status: u16, message: &str) -> AppError {
    if message.contains("API key not valid") || message.contains("API_KEY_INVALID") {
        return AppError::Configuration("Invalid or missing Gemini API key.".to_string());
    }
    if status == 429 || message.contains("quota") || message.contains("RESOURCE_EXHAUSTED") {
        return AppError::QuotaExceeded;
    }
    AppError::Upstream(message.to_string())
}
