use std::sync::Arc;

use minijinja::Environment;

use crate::config::Config;
use crate::generation::Instructions;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Page templates parsed once at startup.
    pub templates: Arc<Environment<'static>>,
    /// Category → rewrite instruction mapping.
    pub instructions: Arc<Instructions>,
    /// Pluggable text generator. Default: GeminiClient.
    pub generator: Arc<dyn TextGenerator>,
}
