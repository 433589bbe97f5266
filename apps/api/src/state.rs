use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup — requests share nothing
/// mutable and may run fully in parallel.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analyzer backend. Selected once at startup:
    /// GeminiAnalyzer when a credential is configured, HeuristicAnalyzer otherwise.
    pub analyzer: Arc<dyn Analyzer>,
    pub config: Config,
}
