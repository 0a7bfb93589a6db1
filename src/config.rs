use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// API key for the generative model provider
    pub model_api_key: String,

    /// Chat-completions endpoint of the model provider
    #[serde(default = "default_model_api_url")]
    pub model_api_url: String,

    /// Model identifier sent with every completion request
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Path of the append-only diagnostic log
    #[serde(default = "default_diagnostic_log_path")]
    pub diagnostic_log_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_model_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model_name() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_diagnostic_log_path() -> String {
    "model_diagnostics.log".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
