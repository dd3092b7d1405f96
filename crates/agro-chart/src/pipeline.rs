//! Extraction, parsing and chart building for a whole response.
//!
//! A section that cannot be charted never stops the others. Empty sections
//! are skipped without a warning; every other failure yields a localized
//! warning that names the visualization and carries the underlying error.

use agro_core::entities::RecordSet;
use agro_core::enums::{Language, SectionKind};
use agro_core::i18n::section_strings;
use agro_parser::{ParseOptions, check_record_set, parse_record_set};
use serde::Serialize;

use crate::builder::build_chart;
use crate::error::{ChartError, FailureKind};
use crate::spec::ChartSpec;

/// A section that produced no chart, with the message to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionWarning {
    pub section: SectionKind,
    pub failure: FailureKind,
    pub message: String,
}

impl SectionWarning {
    fn new(section: SectionKind, error: &ChartError, language: Language) -> Self {
        let texts = section_strings(language, section);
        let failure = error.failure_kind();
        let lead = match failure {
            FailureKind::SectionNotFound => texts.not_found,
            FailureKind::MissingColumns => texts.columns_warning,
            _ => texts.generation_warning,
        };
        Self {
            section,
            failure,
            message: format!("{lead} {error}"),
        }
    }
}

/// Charts and warnings for one response, in section order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VisualizationReport {
    pub charts: Vec<ChartSpec>,
    pub warnings: Vec<SectionWarning>,
    /// Sections that parsed but had no rows.
    pub skipped: Vec<SectionKind>,
}

impl VisualizationReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty() && self.warnings.is_empty()
    }
}

/// Extract, parse and chart one section.
///
/// # Errors
///
/// Returns whichever stage failed first.
pub fn visualize_section(
    text: &str,
    section: SectionKind,
    options: &ParseOptions,
    language: Language,
) -> Result<ChartSpec, ChartError> {
    let records = parse_record_set(text, section, options)?;
    build_chart(&records, language)
}

/// Chart every section of `text`. Never fails.
#[must_use]
pub fn visualize_response(
    text: &str,
    options: &ParseOptions,
    language: Language,
) -> VisualizationReport {
    let mut report = VisualizationReport::default();
    for section in SectionKind::ALL {
        match visualize_section(text, section, options, language) {
            Ok(chart) => report.charts.push(chart),
            Err(ChartError::EmptyDataset { .. }) => {
                tracing::debug!(%section, "section has no rows, skipping chart");
                report.skipped.push(section);
            }
            Err(error) => {
                tracing::warn!(%section, error = %error, "section could not be charted");
                report
                    .warnings
                    .push(SectionWarning::new(section, &error, language));
            }
        }
    }
    report
}

/// Chart a record set that arrived already typed, as from a tool call.
///
/// The rows go through the same checks as parsed tables, so strict date
/// order applies here too. Returns `Ok(None)` for an empty set.
///
/// # Errors
///
/// Returns [`ChartError::Parse`] when a row fails its checks, or
/// [`ChartError::Serialize`] if the rows cannot be serialized.
pub fn visualize_records(
    records: &RecordSet,
    options: &ParseOptions,
    language: Language,
) -> Result<Option<ChartSpec>, ChartError> {
    check_record_set(records, options)?;
    match build_chart(records, language) {
        Ok(chart) => Ok(Some(chart)),
        Err(ChartError::EmptyDataset { kind }) => {
            tracing::debug!(chart = %kind, "tool call carried no rows");
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

/// Localized warning for a failure outside [`visualize_response`].
#[must_use]
pub fn warning_for(section: SectionKind, error: &ChartError, language: Language) -> SectionWarning {
    SectionWarning::new(section, error, language)
}
