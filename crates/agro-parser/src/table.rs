//! Raw tables: header plus string rows, before type coercion.

use csv::{ReaderBuilder, Trim};

use crate::error::ParserError;
use crate::extract::split_cells;

/// Header cells and data rows, all trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A raw table read from Markdown, plus how many rows were dropped for
/// having the wrong number of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownTable {
    pub table: RawTable,
    pub skipped_rows: usize,
}

impl RawTable {
    /// Read a CSV body. The first record is the header.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::MalformedTable`] for the first data row whose
    /// field count differs from the header, or [`ParserError::Csv`] when the
    /// text is not valid CSV.
    pub fn from_csv(body: &str, delimiter: u8) -> Result<Self, ParserError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(delimiter)
            .from_reader(body.as_bytes());

        let mut table = Self::default();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let cells: Vec<String> = record.iter().map(ToString::to_string).collect();
            if index == 0 {
                table.headers = cells;
                continue;
            }
            if cells.len() != table.headers.len() {
                return Err(ParserError::MalformedTable {
                    line: record.position().map_or(0, csv::Position::line),
                    expected: table.headers.len(),
                    found: cells.len(),
                });
            }
            table.rows.push(cells);
        }
        Ok(table)
    }

    /// Read a Markdown pipe table. Separator rows are ignored and rows whose
    /// cell count differs from the header are skipped.
    #[must_use]
    pub fn from_markdown(body: &str) -> MarkdownTable {
        let mut lines = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !is_separator_row(line));

        let Some(header) = lines.next() else {
            return MarkdownTable::default();
        };
        let headers: Vec<String> = split_cells(header).into_iter().map(String::from).collect();

        let mut out = MarkdownTable {
            table: Self {
                headers,
                rows: Vec::new(),
            },
            skipped_rows: 0,
        };
        for line in lines {
            let cells = split_cells(line);
            if cells.len() == out.table.headers.len() {
                out.table.rows.push(cells.into_iter().map(String::from).collect());
            } else {
                out.skipped_rows += 1;
            }
        }
        if out.skipped_rows > 0 {
            tracing::debug!(
                skipped = out.skipped_rows,
                expected = out.table.headers.len(),
                "skipped markdown rows with wrong cell count"
            );
        }
        out
    }

    /// Positions of `required` columns in the header.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::MissingColumns`] listing every absent column.
    pub fn column_index(&self, required: &[&'static str]) -> Result<ColumnIndex, ParserError> {
        let mut positions = Vec::with_capacity(required.len());
        let mut missing = Vec::new();
        for &name in required {
            match self.headers.iter().position(|h| h == name) {
                Some(at) => positions.push((name, at)),
                None => missing.push(name.to_string()),
            }
        }
        if missing.is_empty() {
            Ok(ColumnIndex { positions })
        } else {
            Err(ParserError::MissingColumns { missing })
        }
    }
}

/// Where each required column lives in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: Vec<(&'static str, usize)>,
}

impl ColumnIndex {
    #[must_use]
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions
            .iter()
            .find(|(name, _)| *name == column)
            .map(|&(_, at)| at)
    }
}

fn is_separator_row(line: &str) -> bool {
    let cells = split_cells(line);
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let dashes = cell.trim_matches(':');
            !dashes.is_empty() && dashes.chars().all(|c| c == '-')
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn csv_trims_fields_and_honours_quotes() {
        let table = RawTable::from_csv(
            "Planta , Probabilidade (%), Fatores\nCacau, 70 ,\"Chuva, sombra\"\n\n",
            b',',
        )
        .unwrap();
        assert_eq!(table.headers, strings(&["Planta", "Probabilidade (%)", "Fatores"]));
        assert_eq!(table.rows, vec![strings(&["Cacau", "70", "Chuva, sombra"])]);
    }

    #[test]
    fn csv_row_with_wrong_field_count_is_malformed() {
        let err = RawTable::from_csv("a,b,c\n1,2,3\n4,5\n", b',').unwrap_err();
        match err {
            ParserError::MalformedTable {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_honours_custom_delimiter() {
        let table = RawTable::from_csv("a;b\n1,5;2\n", b';').unwrap();
        assert_eq!(table.rows, vec![strings(&["1,5", "2"])]);
    }

    #[test]
    fn empty_csv_body_has_no_headers() {
        let table = RawTable::from_csv("", b',').unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn markdown_skips_separator_and_short_rows() {
        let parsed = RawTable::from_markdown(
            "| Atividade | Planta | Início | Fim |\n\
             |:---|---|---:|:---:|\n\
             | Plantio | Açaí | 2024-01-01 | 2024-01-10 |\n\
             | Colheita | Açaí | 2024-06-01 |\n",
        );
        assert_eq!(parsed.skipped_rows, 1);
        assert_eq!(parsed.table.rows.len(), 1);
        assert_eq!(parsed.table.rows[0][1], "Açaí");
    }

    #[test]
    fn missing_columns_are_all_listed() {
        let table = RawTable {
            headers: strings(&["Planta", "Extra"]),
            rows: Vec::new(),
        };
        let err = table
            .column_index(&["Planta", "Estágio", "Duração (dias)"])
            .unwrap_err();
        match err {
            ParserError::MissingColumns { missing } => {
                assert_eq!(missing, strings(&["Estágio", "Duração (dias)"]));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn column_index_tolerates_reordering_and_extras() {
        let table = RawTable {
            headers: strings(&["Nota", "Produção (kg/hectare)", "Planta"]),
            rows: Vec::new(),
        };
        let index = table.column_index(&["Planta", "Produção (kg/hectare)"]).unwrap();
        assert_eq!(index.position("Planta"), Some(2));
        assert_eq!(index.position("Produção (kg/hectare)"), Some(1));
        assert_eq!(index.position("Nota"), None);
    }
}
