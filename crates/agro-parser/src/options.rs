use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParserError;

/// How a section's table is delimited in the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    /// Try a fenced CSV block first, then a Markdown table.
    #[default]
    Auto,
    FencedCsv,
    MarkdownTable,
}

impl TableFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::FencedCsv => "fenced_csv",
            Self::MarkdownTable => "markdown_table",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableFormat {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "auto" => Ok(Self::Auto),
            "fenced_csv" | "csv" => Ok(Self::FencedCsv),
            "markdown_table" | "markdown" | "md" => Ok(Self::MarkdownTable),
            other => Err(ParserError::UnknownFormat(other.to_string())),
        }
    }
}

/// Knobs for extraction and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub format: TableFormat,
    /// Field delimiter for fenced CSV blocks.
    pub csv_delimiter: u8,
    /// Reject schedule events that end before they start.
    pub enforce_date_order: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            format: TableFormat::Auto,
            csv_delimiter: b',',
            enforce_date_order: false,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub const fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.csv_delimiter = delimiter;
        self
    }

    #[must_use]
    pub const fn with_date_order(mut self, enforce: bool) -> Self {
        self.enforce_date_order = enforce;
        self
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("auto", TableFormat::Auto)]
    #[case("fenced-csv", TableFormat::FencedCsv)]
    #[case("CSV", TableFormat::FencedCsv)]
    #[case("markdown", TableFormat::MarkdownTable)]
    fn parses_format_names(#[case] raw: &str, #[case] expected: TableFormat) {
        assert_eq!(raw.parse::<TableFormat>().unwrap(), expected);
    }

    #[test]
    fn defaults_to_auto_comma_lenient() {
        let opts = ParseOptions::default();
        assert_eq!(opts.format, TableFormat::Auto);
        assert_eq!(opts.csv_delimiter, b',');
        assert!(!opts.enforce_date_order);
    }
}
