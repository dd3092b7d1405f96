use std::path::PathBuf;

/// Errors from session state changes and plan input checks.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Task {index} does not exist (checklist has {len} tasks)")]
    TaskOutOfRange { index: usize, len: usize },

    /// Carries the localized message shown to the user.
    #[error("{0}")]
    MissingApiKey(String),

    /// Carries the localized message shown to the user.
    #[error("{0}")]
    MissingRequest(String),
}

/// Errors while loading the reference dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Dataset is empty")]
    Empty,

    #[error("Dataset header has an empty column name at position {0}")]
    BlankHeader(usize),

    #[error("Dataset line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
