//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// POST /api/v1/analyze
///
/// Validates both documents are present, then runs whichever analyzer
/// backend was selected at startup. Input validation happens BEFORE any
/// backend call — an empty document never reaches an analyzer.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeText cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    info!(
        "Analyzing resume ({} chars) against job description ({} chars) via {} backend",
        request.resume_text.len(),
        request.job_description.len(),
        state.analyzer.backend()
    );

    let result = state
        .analyzer
        .analyze(&request.resume_text, &request.job_description)
        .await?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::config::Config;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Records invocations so tests can assert validation short-circuits.
    struct CountingAnalyzer {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Analyzer for CountingAnalyzer {
        async fn analyze(
            &self,
            _resume_text: &str,
            _job_description: &str,
        ) -> Result<AnalysisResult, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Unknown("should not matter".to_string()))
        }

        fn backend(&self) -> &'static str {
            "counting"
        }
    }

    fn test_state(calls: Arc<AtomicUsize>) -> AppState {
        AppState {
            analyzer: Arc::new(CountingAnalyzer { calls }),
            config: Config {
                gemini_api_key: None,
                gemini_model: "gemini-2.0-flash".to_string(),
                llm_timeout_secs: 30,
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_empty_resume_rejected_before_analyzer_runs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let state = test_state(calls.clone());

        let result = handle_analyze(
            State(state),
            Json(AnalyzeRequest {
                resume_text: "   ".to_string(),
                job_description: "a real job description".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_job_description_rejected_before_analyzer_runs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let state = test_state(calls.clone());

        let result = handle_analyze(
            State(state),
            Json(AnalyzeRequest {
                resume_text: "a real resume".to_string(),
                job_description: String::new(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_input_reaches_analyzer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let state = test_state(calls.clone());

        let _ = handle_analyze(
            State(state),
            Json(AnalyzeRequest {
                resume_text: "resume".to_string(),
                job_description: "job".to_string(),
            }),
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_request_deserializes_camel_case_body() {
        let json = r#"{"resumeText": "my resume", "jobDescription": "the role"}"#;
        let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.resume_text, "my resume");
        assert_eq!(request.job_description, "the role");
    }
}
