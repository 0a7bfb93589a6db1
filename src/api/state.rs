use std::sync::Arc;

use crate::config::Config;
use crate::services::diagnostics::{DiagnosticSink, FileDiagnostics};
use crate::services::model::{ChatModel, OpenAiChatModel};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ChatModel>,
    pub diagnostics: Arc<dyn DiagnosticSink>,
}

impl AppState {
    /// Wires up the production model client and file-backed diagnostics
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: Arc::new(OpenAiChatModel::new(
                config.model_api_key.clone(),
                config.model_api_url.clone(),
                config.model_name.clone(),
            )),
            diagnostics: Arc::new(FileDiagnostics::new(&config.diagnostic_log_path)),
        }
    }

    /// Builds state from explicit collaborators; used by tests
    pub fn with_parts(model: Arc<dyn ChatModel>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self { model, diagnostics }
    }
}
