//! Row coercion into typed records.

use agro_core::entities::{
    DevelopmentStage, ProductionForecast, RecordSet, ScheduleEvent, SoilIndicator, YieldEstimate,
};
use agro_core::enums::SectionKind;
use chrono::NaiveDate;

use crate::error::ParserError;
use crate::options::ParseOptions;
use crate::table::ColumnIndex;

/// A record type that can be read from, and written back to, one section's
/// table.
pub trait TableRecord: Sized {
    /// The section whose table holds these records.
    const SECTION: SectionKind;

    /// Coerce one data row.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidFieldValue`] for any cell that cannot be
    /// coerced.
    fn from_row(row: &Row<'_>) -> Result<Self, ParserError>;

    /// Cells in the order of the section's required fields.
    fn to_cells(&self) -> Vec<String>;

    fn into_record_set(records: Vec<Self>) -> RecordSet;

    /// Cross-field checks run after coercion.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidFieldValue`] when a check fails.
    fn check(&self, _row: usize, _options: &ParseOptions) -> Result<(), ParserError> {
        Ok(())
    }
}

/// One data row with its 1-based position among the data rows.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub number: usize,
    cells: &'a [String],
    columns: &'a ColumnIndex,
}

impl<'a> Row<'a> {
    #[must_use]
    pub const fn new(number: usize, cells: &'a [String], columns: &'a ColumnIndex) -> Self {
        Self {
            number,
            cells,
            columns,
        }
    }

    /// Raw cell under `column`.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::MissingColumns`] if `column` was not indexed.
    pub fn text(&self, column: &'static str) -> Result<&'a str, ParserError> {
        self.columns
            .position(column)
            .and_then(|at| self.cells.get(at))
            .map(String::as_str)
            .ok_or_else(|| ParserError::MissingColumns {
                missing: vec![column.to_string()],
            })
    }

    /// Calendar date in ISO `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidFieldValue`] when the cell is not a date.
    pub fn date(&self, column: &'static str) -> Result<NaiveDate, ParserError> {
        let raw = self.text(column)?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|e| self.invalid(column, raw, format!("expected a YYYY-MM-DD date ({e})")))
    }

    /// Non-negative whole number.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidFieldValue`] when the cell is not one.
    pub fn whole_number(&self, column: &'static str) -> Result<u32, ParserError> {
        let raw = self.text(column)?;
        raw.parse::<u32>()
            .map_err(|e| self.invalid(column, raw, format!("expected a whole number ({e})")))
    }

    /// Finite number. A lone decimal comma is accepted (`72,5`).
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidFieldValue`] when the cell is not one.
    pub fn number(&self, column: &'static str) -> Result<f64, ParserError> {
        let raw = self.text(column)?;
        let parsed = raw.parse::<f64>().or_else(|e| {
            if raw.matches(',').count() == 1 && !raw.contains('.') {
                raw.replace(',', ".").parse::<f64>()
            } else {
                Err(e)
            }
        });
        match parsed {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(self.invalid(column, raw, "expected a finite number")),
            Err(e) => Err(self.invalid(column, raw, format!("expected a number ({e})"))),
        }
    }

    /// Number within `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidFieldValue`] when out of range.
    pub fn number_in(&self, column: &'static str, min: f64, max: f64) -> Result<f64, ParserError> {
        let value = self.number(column)?;
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            let raw = self.text(column)?;
            Err(self.invalid(column, raw, format!("must be between {min} and {max}")))
        }
    }

    fn invalid(&self, column: &'static str, raw: &str, reason: impl Into<String>) -> ParserError {
        ParserError::InvalidFieldValue {
            row: self.number,
            column,
            value: raw.to_string(),
            reason: reason.into(),
        }
    }
}

impl TableRecord for ScheduleEvent {
    const SECTION: SectionKind = SectionKind::Schedule;

    fn from_row(row: &Row<'_>) -> Result<Self, ParserError> {
        Ok(Self {
            activity: row.text("Atividade")?.to_string(),
            plant: row.text("Planta")?.to_string(),
            start_date: row.date("Início")?,
            end_date: row.date("Fim")?,
        })
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.activity.clone(),
            self.plant.clone(),
            self.start_date.to_string(),
            self.end_date.to_string(),
        ]
    }

    fn into_record_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Schedule(records)
    }

    fn check(&self, row: usize, options: &ParseOptions) -> Result<(), ParserError> {
        if self.is_chronological() {
            return Ok(());
        }
        if options.enforce_date_order {
            return Err(ParserError::InvalidFieldValue {
                row,
                column: "Fim",
                value: self.end_date.to_string(),
                reason: format!("ends before it starts ({})", self.start_date),
            });
        }
        tracing::warn!(
            row,
            activity = %self.activity,
            plant = %self.plant,
            start = %self.start_date,
            end = %self.end_date,
            "schedule event ends before it starts"
        );
        Ok(())
    }
}

impl TableRecord for DevelopmentStage {
    const SECTION: SectionKind = SectionKind::Development;

    fn from_row(row: &Row<'_>) -> Result<Self, ParserError> {
        Ok(Self {
            plant: row.text("Planta")?.to_string(),
            stage: row.text("Estágio")?.to_string(),
            duration_days: row.whole_number("Duração (dias)")?,
        })
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.plant.clone(),
            self.stage.clone(),
            self.duration_days.to_string(),
        ]
    }

    fn into_record_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Development(records)
    }
}

impl TableRecord for YieldEstimate {
    const SECTION: SectionKind = SectionKind::Yield;

    fn from_row(row: &Row<'_>) -> Result<Self, ParserError> {
        Ok(Self {
            plant: row.text("Planta")?.to_string(),
            probability_pct: row.number_in("Probabilidade (%)", 0.0, 100.0)?,
            factors: row.text("Fatores")?.to_string(),
        })
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.plant.clone(),
            self.probability_pct.to_string(),
            self.factors.clone(),
        ]
    }

    fn into_record_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Yield(records)
    }
}

impl TableRecord for ProductionForecast {
    const SECTION: SectionKind = SectionKind::Production;

    fn from_row(row: &Row<'_>) -> Result<Self, ParserError> {
        Ok(Self {
            plant: row.text("Planta")?.to_string(),
            production_kg_per_ha: row.number_in("Produção (kg/hectare)", 0.0, f64::MAX)?,
        })
    }

    fn to_cells(&self) -> Vec<String> {
        vec![self.plant.clone(), self.production_kg_per_ha.to_string()]
    }

    fn into_record_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Production(records)
    }
}

impl TableRecord for SoilIndicator {
    const SECTION: SectionKind = SectionKind::Soil;

    fn from_row(row: &Row<'_>) -> Result<Self, ParserError> {
        Ok(Self {
            indicator: row.text("Indicador")?.to_string(),
            initial_value: row.number("Valor Inicial")?,
            final_value: row.number("Valor Final")?,
        })
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.indicator.clone(),
            self.initial_value.to_string(),
            self.final_value.to_string(),
        ]
    }

    fn into_record_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Soil(records)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::table::RawTable;

    fn single_row<T: TableRecord>(cells: &[&str]) -> Result<T, ParserError> {
        let table = RawTable {
            headers: T::SECTION.required_fields().iter().map(ToString::to_string).collect(),
            rows: vec![cells.iter().map(ToString::to_string).collect()],
        };
        let index = table.column_index(T::SECTION.required_fields())?;
        T::from_row(&Row::new(1, &table.rows[0], &index))
    }

    #[test]
    fn schedule_event_from_iso_dates() {
        let event: ScheduleEvent =
            single_row(&["Plantio", "Mandioca", "2024-01-01", "2024-01-15"]).unwrap();
        assert_eq!(event.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(event.end_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[rstest]
    #[case("01/02/2024")]
    #[case("2024-13-01")]
    #[case("janeiro")]
    fn schedule_rejects_non_iso_dates(#[case] start: &str) {
        let err = single_row::<ScheduleEvent>(&["Plantio", "Açaí", start, "2024-03-01"]).unwrap_err();
        assert!(matches!(
            err,
            ParserError::InvalidFieldValue { column: "Início", row: 1, .. }
        ));
    }

    #[test]
    fn duration_must_be_whole_days() {
        let err = single_row::<DevelopmentStage>(&["Banana", "Muda", "12.5"]).unwrap_err();
        assert!(matches!(
            err,
            ParserError::InvalidFieldValue { column: "Duração (dias)", .. }
        ));
    }

    #[rstest]
    #[case("72.5", 72.5)]
    #[case("72,5", 72.5)]
    #[case("0", 0.0)]
    #[case("100", 100.0)]
    fn probability_accepts_numbers_in_range(#[case] raw: &str, #[case] expected: f64) {
        let estimate: YieldEstimate = single_row(&["Cacau", raw, "Chuva"]).unwrap();
        assert!((estimate.probability_pct - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("alta")]
    #[case("120")]
    #[case("-1")]
    #[case("NaN")]
    #[case("1,000,5")]
    fn probability_rejects_bad_values(#[case] raw: &str) {
        let err = single_row::<YieldEstimate>(&["Cacau", raw, "Chuva"]).unwrap_err();
        match err {
            ParserError::InvalidFieldValue { column, value, .. } => {
                assert_eq!(column, "Probabilidade (%)");
                assert_eq!(value, raw);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn production_rejects_negative_values() {
        assert!(single_row::<ProductionForecast>(&["Açaí", "-5"]).is_err());
        let ok: ProductionForecast = single_row(&["Açaí", "8000"]).unwrap();
        assert!((ok.production_kg_per_ha - 8000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inverted_event_is_rejected_only_when_enforced() {
        let event: ScheduleEvent =
            single_row(&["Colheita", "Açaí", "2024-05-01", "2024-04-01"]).unwrap();
        let lenient = ParseOptions::default();
        assert!(event.check(1, &lenient).is_ok());

        let strict = lenient.with_date_order(true);
        let err = event.check(3, &strict).unwrap_err();
        assert!(matches!(
            err,
            ParserError::InvalidFieldValue { row: 3, column: "Fim", .. }
        ));
    }

    #[test]
    fn cells_follow_required_field_order() {
        let soil = SoilIndicator {
            indicator: "pH".into(),
            initial_value: 4.5,
            final_value: 6.0,
        };
        assert_eq!(soil.to_cells(), vec!["pH", "4.5", "6"]);
    }
}
