//! # agro-parser
//!
//! Turns free-form plan responses into typed records.
//!
//! Two stages, both pure:
//! - **Extraction** ([`extract`]): locate a labeled section, either as a
//!   fenced CSV block (`Cronograma de Cultivo:` followed by a code fence) or
//!   as a Markdown pipe table starting with the section's first column.
//! - **Parsing** ([`table`], [`records`]): split the body into a raw table,
//!   check the required columns, and coerce every row into its record type.
//!   Any invalid row fails the whole section.

pub mod error;
pub mod extract;
pub mod options;
pub mod parse;
pub mod records;
pub mod table;

pub use error::ParserError;
pub use extract::{Extracted, extract_fenced_block, extract_markdown_table, extract_section};
pub use options::{ParseOptions, TableFormat};
pub use parse::{check_record_set, parse_record_set, parse_section, parse_table, to_csv};
pub use records::TableRecord;
pub use table::{MarkdownTable, RawTable};
