//! Analysis provider seam.
//!
//! ARCHITECTURAL RULE: no other module may call the Gemini API directly.
//! All generative calls go through `GeminiClient`; handlers only see the
//! `AnalysisProvider` trait so tests can substitute stubs.

pub mod gemini;

pub use gemini::{GeminiClient, MODEL};

use async_trait::async_trait;

use crate::diagnosis::form::FormData;
use crate::diagnosis::DiagnosisCategory;
use crate::errors::AppError;

/// Turns one symptom report into triage text, or a classified failure.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(
        &self,
        form: &FormData,
        category: DiagnosisCategory,
    ) -> Result<String, AppError>;
}
