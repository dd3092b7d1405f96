//! Rendering of model answers, charts and the checklist.
//!
//! JSON formats carry charts as Vega-Lite documents for an external
//! renderer. The table format shows each chart's rows under its heading.

use agro_chart::{ChartSpec, SectionWarning, VisualizationReport};
use agro_core::entities::ImplementationTask;
use agro_core::enums::{Language, SectionKind};
use agro_core::i18n::{section_strings, strings};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::output::{table, table_options, value_to_cell};
use crate::ui;

#[derive(Serialize)]
struct ReportView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<&'a str>,
    charts: Vec<Value>,
    warnings: &'a [SectionWarning],
    skipped: &'a [SectionKind],
}

pub fn render_report(
    response: Option<&str>,
    report: &VisualizationReport,
    language: Language,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let view = ReportView {
        response,
        charts: report.charts.iter().map(ChartSpec::to_vega_lite).collect(),
        warnings: &report.warnings,
        skipped: &report.skipped,
    };
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
        OutputFormat::Raw => Ok(serde_json::to_string(&view)?),
        OutputFormat::Table => {
            let mut blocks = Vec::new();
            if let Some(text) = response {
                blocks.push(format!(
                    "{}\n\n{}",
                    ui::heading(strings(language).schedule_title),
                    text.trim()
                ));
            }
            blocks.extend(report.charts.iter().map(|chart| chart_block(chart, language)));
            Ok(blocks.join("\n\n"))
        }
    }
}

/// Print the report; in table format the warnings go to stderr.
pub fn print_report(
    response: Option<&str>,
    report: &VisualizationReport,
    language: Language,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render_report(response, report, language, format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    if format == OutputFormat::Table {
        for warning in &report.warnings {
            ui::warn(&warning.message);
        }
    }
    Ok(())
}

pub fn render_chart(
    chart: &ChartSpec,
    language: Language,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&chart.to_vega_lite())?),
        OutputFormat::Raw => Ok(serde_json::to_string(&chart.to_vega_lite())?),
        OutputFormat::Table => Ok(chart_block(chart, language)),
    }
}

fn chart_block(chart: &ChartSpec, language: Language) -> String {
    let heading = section_strings(language, chart.kind.section()).heading;
    format!("{}\n{}", ui::heading(heading), chart_table(chart))
}

/// The chart's rows, one column per encoded field.
fn chart_table(chart: &ChartSpec) -> String {
    let encoding = &chart.encoding;
    let mut columns: Vec<(&str, &str)> = Vec::new();
    let channels = [&encoding.y, &encoding.x, &encoding.x2, &encoding.color];
    let fields = channels
        .into_iter()
        .flatten()
        .chain(encoding.tooltip.iter());
    for def in fields {
        if !columns.iter().any(|(field, _)| *field == def.field) {
            columns.push((def.field.as_str(), def.title.as_str()));
        }
    }

    let headers: Vec<&str> = columns.iter().map(|(_, title)| *title).collect();
    let rows: Vec<Vec<String>> = chart
        .data
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|(field, _)| row.get(*field).map_or_else(|| "-".to_string(), value_to_cell))
                .collect()
        })
        .collect();
    table::render_table(&headers, &rows, table_options())
}

pub fn render_checklist(
    tasks: &[ImplementationTask],
    language: Language,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tasks)?),
        OutputFormat::Raw => Ok(serde_json::to_string(tasks)?),
        OutputFormat::Table => {
            let texts = strings(language);
            let mut out = ui::heading(texts.checklist_title);
            if tasks.is_empty() {
                out.push('\n');
                out.push_str(texts.checklist_empty);
            }
            for (number, task) in (1..).zip(tasks) {
                let mark = if task.done { 'x' } else { ' ' };
                out.push_str(&format!("\n{number:>2}. [{mark}] {}", task.task));
            }
            Ok(out)
        }
    }
}
