use agro_core::entities::{
    DevelopmentStage, ProductionForecast, RecordSet, ScheduleEvent, SoilIndicator, YieldEstimate,
};
use agro_core::enums::SectionKind;

use crate::error::ParserError;
use crate::extract::{extract_section, sniff_format};
use crate::options::{ParseOptions, TableFormat};
use crate::records::{Row, TableRecord};
use crate::table::RawTable;

/// Parse an already extracted section body into records.
///
/// `format` names the body's convention; [`TableFormat::Auto`] treats a body
/// whose first non-blank line starts with `|` as Markdown and anything else
/// as CSV.
///
/// # Errors
///
/// Returns the first [`ParserError`] met. A single bad row fails the whole
/// table.
pub fn parse_table<T: TableRecord>(
    body: &str,
    format: TableFormat,
    options: &ParseOptions,
) -> Result<Vec<T>, ParserError> {
    let table = match resolve_format(body, format) {
        TableFormat::MarkdownTable => RawTable::from_markdown(body).table,
        _ => RawTable::from_csv(body, options.csv_delimiter)?,
    };

    let columns = table.column_index(T::SECTION.required_fields())?;
    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, cells)| -> Result<T, ParserError> {
            let row = Row::new(i + 1, cells, &columns);
            let record = T::from_row(&row)?;
            record.check(row.number, options)?;
            Ok(record)
        })
        .collect()
}

/// Extract and parse the section holding `T` records.
///
/// # Errors
///
/// Returns [`ParserError::SectionNotFound`] when the section is absent, or
/// any error from [`parse_table`].
pub fn parse_section<T: TableRecord>(
    text: &str,
    options: &ParseOptions,
) -> Result<Vec<T>, ParserError> {
    let extracted = extract_section(text, T::SECTION, options.format)?;
    tracing::debug!(
        section = %T::SECTION,
        format = %extracted.format,
        bytes = extracted.body.len(),
        "extracted section"
    );
    parse_table(&extracted.body, extracted.format, options)
}

/// [`parse_section`] for a section chosen at runtime.
///
/// # Errors
///
/// Same as [`parse_section`].
pub fn parse_record_set(
    text: &str,
    section: SectionKind,
    options: &ParseOptions,
) -> Result<RecordSet, ParserError> {
    fn typed<T: TableRecord>(text: &str, options: &ParseOptions) -> Result<RecordSet, ParserError> {
        parse_section::<T>(text, options).map(T::into_record_set)
    }

    match section {
        SectionKind::Schedule => typed::<ScheduleEvent>(text, options),
        SectionKind::Development => typed::<DevelopmentStage>(text, options),
        SectionKind::Yield => typed::<YieldEstimate>(text, options),
        SectionKind::Production => typed::<ProductionForecast>(text, options),
        SectionKind::Soil => typed::<SoilIndicator>(text, options),
    }
}

/// Run the per-row checks [`parse_table`] applies on records that arrived
/// already typed. Rows are numbered from 1.
///
/// # Errors
///
/// Returns the first failed check.
pub fn check_record_set(records: &RecordSet, options: &ParseOptions) -> Result<(), ParserError> {
    fn each<T: TableRecord>(records: &[T], options: &ParseOptions) -> Result<(), ParserError> {
        records
            .iter()
            .enumerate()
            .try_for_each(|(i, record)| record.check(i + 1, options))
    }

    match records {
        RecordSet::Schedule(v) => each(v, options),
        RecordSet::Development(v) => each(v, options),
        RecordSet::Yield(v) => each(v, options),
        RecordSet::Production(v) => each(v, options),
        RecordSet::Soil(v) => each(v, options),
    }
}

/// Serialize records under the section's Portuguese header.
///
/// # Errors
///
/// Returns [`ParserError::Csv`] if the writer fails.
pub fn to_csv<T: TableRecord>(records: &[T], delimiter: u8) -> Result<String, ParserError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer.write_record(T::SECTION.required_fields())?;
    for record in records {
        writer.write_record(record.to_cells())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ParserError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn resolve_format(body: &str, format: TableFormat) -> TableFormat {
    match format {
        TableFormat::Auto => sniff_format(body),
        explicit => explicit,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn header_only_table_yields_no_records() {
        let records: Vec<ProductionForecast> = parse_table(
            "Planta,Produção (kg/hectare)",
            TableFormat::FencedCsv,
            &ParseOptions::default(),
        )
        .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn auto_detects_markdown_bodies() {
        assert_eq!(
            resolve_format("\n| Planta |\n", TableFormat::Auto),
            TableFormat::MarkdownTable
        );
        assert_eq!(
            resolve_format("Planta,Fim", TableFormat::Auto),
            TableFormat::FencedCsv
        );
    }

    #[test]
    fn one_bad_row_fails_the_section() {
        let body = "Planta,Estágio,Duração (dias)\nBanana,Muda,30\nBanana,Adulta,muitos\n";
        let err =
            parse_table::<DevelopmentStage>(body, TableFormat::FencedCsv, &ParseOptions::default())
                .unwrap_err();
        assert!(matches!(err, ParserError::InvalidFieldValue { row: 2, .. }));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let body = "Indicador,Unidade,Valor Inicial,Valor Final\npH,-,4.5,6.0\n";
        let records: Vec<SoilIndicator> =
            parse_table(body, TableFormat::FencedCsv, &ParseOptions::default()).unwrap();
        assert_eq!(
            records,
            vec![SoilIndicator {
                indicator: "pH".into(),
                initial_value: 4.5,
                final_value: 6.0,
            }]
        );
    }

    #[test]
    fn record_set_dispatches_by_section() {
        let text = "Previsão de Produção:\n```csv\nPlanta,Produção (kg/hectare)\nAçaí,8000\n```";
        let set = parse_record_set(text, SectionKind::Production, &ParseOptions::default()).unwrap();
        assert_eq!(set.section(), SectionKind::Production);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn to_csv_writes_portuguese_header() {
        let csv = to_csv(
            &[ProductionForecast {
                plant: "Açaí".into(),
                production_kg_per_ha: 8000.5,
            }],
            b',',
        )
        .unwrap();
        assert_eq!(csv, "Planta,Produção (kg/hectare)\nAçaí,8000.5\n");
    }
}
