//! Hosted language-model configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-2.5-flash".into()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}

const fn default_timeout_secs() -> u64 {
    120
}

const fn default_max_context_chars() -> usize {
    15_000
}

const fn default_max_cases() -> usize {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// API key for the generation endpoint.
    #[serde(default)]
    pub api_key: String,

    /// Model name (e.g., `gemini-2.5-flash`).
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the REST API, without a trailing slash.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Characters of case digest passed to the model.
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,

    /// Cases included in a category digest.
    #[serde(default = "default_max_cases")]
    pub max_cases: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_context_chars: default_max_context_chars(),
            max_cases: default_max_cases(),
        }
    }
}

impl GeneratorConfig {
    /// Check if an API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
