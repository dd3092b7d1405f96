//! How tables are pulled out of model responses.

use agro_parser::TableFormat;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_delimiter() -> String {
    ",".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub format: TableFormat,

    /// Single ASCII character, or `tab`.
    #[serde(default = "default_delimiter")]
    pub csv_delimiter: String,

    /// Fail a schedule section whose events end before they start.
    #[serde(default)]
    pub enforce_date_order: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            format: TableFormat::default(),
            csv_delimiter: default_delimiter(),
            enforce_date_order: false,
        }
    }
}

impl ExtractionConfig {
    /// The delimiter as a byte.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] unless the value is one ASCII
    /// character or one of `tab` / `\t`.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        parse_delimiter(&self.csv_delimiter)
    }
}

/// Parse a delimiter as written in config or on the command line.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for anything but a single ASCII
/// character, `tab` or `\t`.
pub fn parse_delimiter(value: &str) -> Result<u8, ConfigError> {
    match value {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        _ => {}
    }
    let bytes = value.as_bytes();
    match bytes {
        [byte] if byte.is_ascii() && !byte.is_ascii_alphanumeric() && *byte != b'"' => Ok(*byte),
        _ => Err(ConfigError::InvalidValue {
            field: "extraction.csv_delimiter".to_string(),
            reason: format!("expected one punctuation character or 'tab', got {value:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delimiter_is_comma() {
        assert_eq!(ExtractionConfig::default().delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn accepts_tab_spellings() {
        for value in ["tab", "\\t", "\t"] {
            assert_eq!(parse_delimiter(value).unwrap(), b'\t');
        }
        assert_eq!(parse_delimiter(";").unwrap(), b';');
    }

    #[test]
    fn rejects_words_letters_and_quotes() {
        for value in ["", ";;", "a", "\"", "ç"] {
            assert!(parse_delimiter(value).is_err(), "{value:?} accepted");
        }
    }
}
