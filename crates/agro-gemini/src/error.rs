//! Model client and tool error types.

use thiserror::Error;

/// Errors from talking to the hosted model.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The prompt or the answer was blocked by the provider's filters.
    #[error("response blocked: {0}")]
    Blocked(String),

    /// The API answered without any usable candidate.
    #[error("model returned no candidates")]
    EmptyResponse,

    /// Failed to parse the API response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors from decoding a model tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {}", errors.join("; "))]
    InvalidArguments { tool: String, errors: Vec<String> },

    #[error("could not decode arguments for {tool}: {source}")]
    Decode {
        tool: String,
        source: serde_json::Error,
    },

    #[error("schema error for {tool}: {message}")]
    Schema { tool: String, message: String },
}
