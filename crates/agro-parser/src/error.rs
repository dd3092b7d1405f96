//! Parser error types for agro-parser.

use agro_core::enums::SectionKind;

/// Errors raised while extracting or parsing one response section.
///
/// Every variant is scoped to a single section: callers skip that section's
/// chart and keep rendering the others.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Section not found: {}", section.label())]
    SectionNotFound { section: SectionKind },

    #[error("Malformed table at line {line}: expected {expected} fields, found {found}")]
    MalformedTable {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Invalid value {value:?} in column '{column}' at row {row}: {reason}")]
    InvalidFieldValue {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown table format: {0}")]
    UnknownFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = ParserError::SectionNotFound {
            section: SectionKind::Soil,
        };
        assert_eq!(err.to_string(), "Section not found: Regeneração do Solo");

        let err = ParserError::MissingColumns {
            missing: vec!["Início".into(), "Fim".into()],
        };
        assert_eq!(err.to_string(), "Missing required columns: Início, Fim");
    }
}
