//! Gemini API configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_max_tool_rounds() -> usize {
    4
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key. Also read from `GEMINI_API_KEY` or `GOOGLE_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Model id sent to the API.
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra model calls allowed per chat turn to answer tool calls.
    #[serde(default = "default_max_tool_rounds")]
    pub max_tool_rounds: usize,

    /// Sampling temperature. The API default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_tool_rounds: default_max_tool_rounds(),
            temperature: None,
        }
    }
}

impl GeminiConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
