//! Locating section bodies inside a free-form response.
//!
//! The response is searched anywhere, never at a fixed position. When a
//! label repeats, the first occurrence that actually introduces a table wins.

use std::sync::LazyLock;

use agro_core::enums::SectionKind;
use regex::Regex;

use crate::error::ParserError;
use crate::options::TableFormat;

/// Everything between the label and the first line of the body: optional bold
/// markers around the colon, whitespace, the opening fence and a short
/// language tag.
static FENCE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(?:\*\*)?[ \t]*:[ \t]*(?:\*\*)?\s*```[A-Za-z0-9_+\-]{0,16}[ \t]*\r?\n")
        .expect("valid fence regex")
});

/// A closing fence alone on its line.
static FENCE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*```[ \t]*\r?$").expect("valid fence regex"));

/// A section body and the delimiter convention it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Either [`TableFormat::FencedCsv`] or [`TableFormat::MarkdownTable`].
    pub format: TableFormat,
    pub body: String,
}

/// Body of the first `<label>:` fenced block, without surrounding blank lines.
#[must_use]
pub fn extract_fenced_block<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    if label.is_empty() {
        return None;
    }
    for (at, _) in text.match_indices(label) {
        let after_label = &text[at + label.len()..];
        let Some(open) = FENCE_OPEN.find(after_label) else {
            continue;
        };
        let rest = &after_label[open.end()..];
        let Some(close) = FENCE_CLOSE.find(rest) else {
            continue;
        };
        return Some(trim_blank_lines(&rest[..close.start()]));
    }
    None
}

/// A Markdown pipe table whose first header cell is `first_header`.
///
/// The header line must be followed by at least one more pipe line. Lines are
/// returned trimmed and joined with `\n`. If several tables start with the
/// same header, the first one carrying every `required` column is preferred.
#[must_use]
pub fn extract_markdown_table(text: &str, first_header: &str, required: &[&str]) -> Option<String> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut candidates: Vec<&[&str]> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if is_header_line(lines[i], first_header) {
            let end = lines[i + 1..]
                .iter()
                .position(|line| !is_pipe_line(line))
                .map_or(lines.len(), |offset| i + 1 + offset);
            if end > i + 1 {
                candidates.push(&lines[i..end]);
                i = end;
                continue;
            }
        }
        i += 1;
    }

    let chosen = candidates
        .iter()
        .find(|table| {
            let header = split_cells(table[0]);
            required.iter().all(|field| header.contains(field))
        })
        .or_else(|| candidates.first())?;
    Some(chosen.join("\n"))
}

/// Locate `section` in `text` using the requested delimiter convention.
///
/// With [`TableFormat::Auto`] every label of the section is tried as a fenced
/// block, in order, before falling back to a Markdown table. A fenced body
/// that is itself a pipe table is tagged [`TableFormat::MarkdownTable`].
///
/// # Errors
///
/// Returns [`ParserError::SectionNotFound`] when no convention matches.
pub fn extract_section(
    text: &str,
    section: SectionKind,
    format: TableFormat,
) -> Result<Extracted, ParserError> {
    let fenced = || {
        section
            .labels()
            .iter()
            .find_map(|label| extract_fenced_block(text, label))
            .map(|body| Extracted {
                format: match format {
                    TableFormat::Auto => sniff_format(body),
                    _ => TableFormat::FencedCsv,
                },
                body: body.to_string(),
            })
    };
    let markdown = || {
        extract_markdown_table(text, section.first_header(), section.required_fields()).map(
            |body| Extracted {
                format: TableFormat::MarkdownTable,
                body,
            },
        )
    };

    let found = match format {
        TableFormat::Auto => fenced().or_else(markdown),
        TableFormat::FencedCsv => fenced(),
        TableFormat::MarkdownTable => markdown(),
    };
    found.ok_or(ParserError::SectionNotFound { section })
}

/// Markdown when the first non-blank line starts with `|`, CSV otherwise.
pub(crate) fn sniff_format(body: &str) -> TableFormat {
    let first = body.lines().map(str::trim).find(|line| !line.is_empty());
    if first.is_some_and(|line| line.starts_with('|')) {
        TableFormat::MarkdownTable
    } else {
        TableFormat::FencedCsv
    }
}

/// Split a pipe line into trimmed cells, dropping the empty edge cells.
pub(crate) fn split_cells(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.trim().split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

fn is_pipe_line(line: &str) -> bool {
    line.len() > 1 && line.starts_with('|') && line.ends_with('|')
}

fn is_header_line(line: &str, first_header: &str) -> bool {
    line.starts_with('|') && split_cells(line).first() == Some(&first_header)
}

/// Drop blank lines at both ends, keeping the first line's indentation.
fn trim_blank_lines(body: &str) -> &str {
    let leading = body.len() - body.trim_start().len();
    let start = body[..leading].rfind('\n').map_or(0, |i| i + 1);
    body[start..].trim_end()
}
