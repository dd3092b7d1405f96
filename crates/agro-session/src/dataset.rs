//! The bundled plant reference dataset.
//!
//! A semicolon-delimited CSV with a fixed header. It is read once, checked for
//! a usable shape, and then handed to prompts verbatim.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::DatasetError;

pub const DATASET_DELIMITER: u8 = b';';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDataset {
    text: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReferenceDataset {
    /// Read and validate the dataset at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read, or any shape
    /// error from [`ReferenceDataset::from_text`].
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_text(text)?;
        tracing::debug!(
            path = %path.display(),
            columns = dataset.headers.len(),
            rows = dataset.rows.len(),
            "loaded reference dataset"
        );
        Ok(dataset)
    }

    /// Validate dataset text already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Empty`] without a header,
    /// [`DatasetError::BlankHeader`] for an unnamed column and
    /// [`DatasetError::RaggedRow`] for a row with the wrong field count.
    pub fn from_text(text: impl Into<String>) -> Result<Self, DatasetError> {
        let text = text.into();
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(DATASET_DELIMITER)
            .from_reader(text.as_bytes());

        let mut records = reader.records();
        let headers: Vec<String> = match records.next() {
            Some(header) => header?.iter().map(ToString::to_string).collect(),
            None => return Err(DatasetError::Empty),
        };
        if let Some(at) = headers.iter().position(String::is_empty) {
            return Err(DatasetError::BlankHeader(at + 1));
        }

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            if record.len() != headers.len() {
                return Err(DatasetError::RaggedRow {
                    line: record.position().map_or(0, csv::Position::line),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            rows.push(record.iter().map(ToString::to_string).collect());
        }

        Ok(Self {
            text,
            headers,
            rows,
        })
    }

    /// The file contents, unchanged, for embedding in a prompt.
    #[must_use]
    pub fn as_prompt_text(&self) -> &str {
        self.text.trim_end()
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = "Planta;Estrato;Ciclo (meses)\nAçaí;Alto;36\nMandioca;Baixo;12\n";

    #[test]
    fn keeps_text_verbatim() {
        let dataset = ReferenceDataset::from_text(SAMPLE).unwrap();
        assert_eq!(dataset.as_prompt_text(), SAMPLE.trim_end());
        assert_eq!(dataset.headers(), ["Planta", "Estrato", "Ciclo (meses)"]);
        assert_eq!(dataset.rows().len(), 2);
        assert_eq!(dataset.rows()[1][0], "Mandioca");
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            ReferenceDataset::from_text(""),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn blank_header_is_rejected() {
        assert!(matches!(
            ReferenceDataset::from_text("Planta;;Ciclo\n"),
            Err(DatasetError::BlankHeader(2))
        ));
    }

    #[test]
    fn ragged_row_is_rejected() {
        let err = ReferenceDataset::from_text("Planta;Estrato\nAçaí;Alto;extra\n").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::RaggedRow {
                line: 2,
                expected: 2,
                found: 3
            }
        ));
    }
}
