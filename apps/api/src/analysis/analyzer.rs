//! Analyzer — pluggable, trait-based backend that turns a resume and a job
//! description into an `AnalysisResult`.
//!
//! Two backends: `HeuristicAnalyzer` (pure-Rust, deterministic, never fails)
//! and `GeminiAnalyzer` (LLM-backed with a strict output contract).
//!
//! `AppState` holds an `Arc<dyn Analyzer>`, selected ONCE at startup from
//! configuration: no credential → heuristic demo backend; credential present
//! → live backend whose classified failures surface as typed errors. The
//! fallback policy is a static deployment choice, never per-request control
//! flow.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::analysis::lexicon::Lexicon;
use crate::analysis::mock::{build_mock_report, MockTemplates};
use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::build_analyze_prompt;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{GeminiClient, LlmError};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The analyzer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn Analyzer>`.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError>;

    /// Backend label for startup logging and transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAnalyzer — keyword matching plus canned templates
// ────────────────────────────────────────────────────────────────────────────

/// Demo backend: heuristic keyword overlap composed with fixed suggestion
/// templates. Total — analysis never fails once inputs are validated.
pub struct HeuristicAnalyzer {
    lexicon: Arc<Lexicon>,
    templates: MockTemplates,
}

impl HeuristicAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            templates: MockTemplates::default(),
        }
    }
}

#[async_trait]
impl Analyzer for HeuristicAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        Ok(build_mock_report(
            resume_text,
            job_description,
            &self.lexicon,
            &self.templates,
        ))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiAnalyzer — LLM-backed analysis with a strict output contract
// ────────────────────────────────────────────────────────────────────────────

/// Live backend: builds the ATS prompt, requests structured JSON output,
/// and parses the response into an `AnalysisResult`. Every failure is
/// classified before it reaches the caller.
pub struct GeminiAnalyzer {
    client: GeminiClient,
}

impl GeminiAnalyzer {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Analyzer for GeminiAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        let prompt = build_analyze_prompt(resume_text, job_description);

        let result = self
            .client
            .call_json::<AnalysisResult>(&prompt)
            .await
            .map_err(|e| classify_llm_error(&e))?;

        info!(
            "LLM analysis completed: match_score={}, found={}, missing={}",
            result.match_score,
            result.keywords_found.len(),
            result.keywords_missing.len()
        );

        Ok(result)
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Provider error classification
// ────────────────────────────────────────────────────────────────────────────

/// Maps a provider failure onto the application error taxonomy.
///
/// All provider-specific knowledge (status codes, error-text fragments) lives
/// here so the taxonomy itself stays stable across provider changes. A parse
/// or provider error never escapes unclassified.
pub fn classify_llm_error(err: &LlmError) -> AppError {
    match err {
        LlmError::Api { status, message } => {
            let text = message.to_lowercase();
            if *status == 429
                || text.contains("429")
                || text.contains("quota")
                || text.contains("too many requests")
            {
                AppError::RateLimited(message.clone())
            } else if *status == 401 || *status == 403 || text.contains("api key") {
                AppError::Unauthorized(message.clone())
            } else if *status == 404 || text.contains("not found") {
                AppError::ModelUnavailable(message.clone())
            } else {
                AppError::Unknown(message.clone())
            }
        }
        LlmError::Http(e) => {
            // Timeout or unreachable provider counts as provider-side outage
            if e.is_timeout() || e.is_connect() {
                AppError::ModelUnavailable(e.to_string())
            } else {
                AppError::Unknown(e.to_string())
            }
        }
        LlmError::Parse(e) => AppError::ParseFailure(e.to_string()),
        LlmError::EmptyContent => AppError::ParseFailure("LLM returned empty content".to_string()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Startup selection
// ────────────────────────────────────────────────────────────────────────────

/// Selects the analyzer backend from configuration, once, at startup.
pub fn select_analyzer(config: &Config, lexicon: Arc<Lexicon>) -> Arc<dyn Analyzer> {
    match &config.gemini_api_key {
        Some(api_key) => {
            let client = GeminiClient::new(
                api_key.clone(),
                config.gemini_model.clone(),
                config.llm_timeout_secs,
            );
            info!("Analyzer backend: gemini (model: {})", config.gemini_model);
            Arc::new(GeminiAnalyzer::new(client))
        }
        None => {
            warn!("GEMINI_API_KEY not set — running in demo mode with the heuristic analyzer");
            Arc::new(HeuristicAnalyzer::new(lexicon))
        }
    }
}
