//! Cross-cutting error types for the planner crates.
//!
//! Domain-specific errors (`ParserError`, `GeminiError`, ...) live in their
//! own crates; this module only covers failures of the shared core types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A language code outside `pt`, `es`, `en`.
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    /// A section or chart name that is not part of the catalog.
    #[error("Unknown {kind}: {value}")]
    UnknownName { kind: &'static str, value: String },
}
