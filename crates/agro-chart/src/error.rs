use agro_core::enums::ChartKind;
use agro_parser::ParserError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("No records for {kind} chart")]
    EmptyDataset { kind: ChartKind },

    #[error(transparent)]
    Parse(#[from] ParserError),

    #[error("Failed to serialize chart data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The model called a chart tool with arguments that did not decode.
    #[error("Rejected tool call: {0}")]
    ToolArguments(String),
}

/// Why a section produced no chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    SectionNotFound,
    MalformedTable,
    MissingColumns,
    InvalidFieldValue,
    EmptyDataset,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SectionNotFound => "section_not_found",
            Self::MalformedTable => "malformed_table",
            Self::MissingColumns => "missing_columns",
            Self::InvalidFieldValue => "invalid_field_value",
            Self::EmptyDataset => "empty_dataset",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ChartError {
    /// Taxonomy bucket for reporting. CSV reader failures count as a
    /// malformed table.
    #[must_use]
    pub const fn failure_kind(&self) -> FailureKind {
        match self {
            Self::EmptyDataset { .. } => FailureKind::EmptyDataset,
            Self::Parse(ParserError::SectionNotFound { .. }) => FailureKind::SectionNotFound,
            Self::Parse(ParserError::MissingColumns { .. }) => FailureKind::MissingColumns,
            Self::Parse(ParserError::InvalidFieldValue { .. }) | Self::ToolArguments(_) => {
                FailureKind::InvalidFieldValue
            }
            Self::Parse(
                ParserError::MalformedTable { .. }
                | ParserError::Csv(_)
                | ParserError::UnknownFormat(_),
            )
            | Self::Serialize(_) => FailureKind::MalformedTable,
        }
    }
}
