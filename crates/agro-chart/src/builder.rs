//! Record sets to chart specs.

use agro_core::entities::{RecordSet, SoilIndicator};
use agro_core::enums::Language;
use agro_core::i18n::{section_strings, strings};
use serde::Serialize;
use serde_json::Value;

use crate::error::ChartError;
use crate::spec::{ChartSpec, Encoding, FieldDef, Mark};

/// One row of the long-form soil table.
#[derive(Debug, Serialize)]
struct SoilReading<'a> {
    indicator: &'a str,
    stage: &'a str,
    value: f64,
}

/// Build the chart spec for a record set, with titles in `language`.
///
/// # Errors
///
/// Returns [`ChartError::EmptyDataset`] when there are no records.
pub fn build_chart(records: &RecordSet, language: Language) -> Result<ChartSpec, ChartError> {
    if records.is_empty() {
        return Err(ChartError::EmptyDataset {
            kind: records.chart_kind(),
        });
    }

    let section = records.section();
    let texts = section_strings(language, section);
    let col = |i: usize| texts.columns.get(i).copied().unwrap_or_default();

    let (encoding, data) = match records {
        RecordSet::Schedule(events) => (
            Encoding {
                x: Some(FieldDef::temporal("start_date", col(2))),
                x2: Some(FieldDef::temporal("end_date", col(3))),
                y: Some(FieldDef::nominal("plant", col(1)).unsorted()),
                color: Some(FieldDef::nominal("activity", col(0)).with_scheme("category10")),
                ..Encoding::default()
            },
            rows(events)?,
        ),
        RecordSet::Development(stages) => (
            Encoding {
                x: Some(FieldDef::quantitative("duration_days", col(2)).summed()),
                y: Some(FieldDef::nominal("plant", col(0))),
                color: Some(FieldDef::nominal("stage", col(1))),
                ..Encoding::default()
            },
            rows(stages)?,
        ),
        RecordSet::Yield(estimates) => (
            Encoding {
                x: Some(FieldDef::quantitative("probability_pct", col(1))),
                y: Some(FieldDef::nominal("plant", col(0))),
                tooltip: vec![FieldDef::nominal("factors", col(2))],
                ..Encoding::default()
            },
            rows(estimates)?,
        ),
        RecordSet::Production(forecasts) => (
            Encoding {
                x: Some(FieldDef::quantitative("production_kg_per_ha", col(1))),
                y: Some(FieldDef::nominal("plant", col(0))),
                ..Encoding::default()
            },
            rows(forecasts)?,
        ),
        RecordSet::Soil(indicators) => {
            let ui = strings(language);
            (
                Encoding {
                    x: Some(FieldDef::nominal("indicator", col(0))),
                    y: Some(FieldDef::quantitative("value", ui.soil_value)),
                    color: Some(FieldDef::nominal("stage", ui.soil_stage)),
                    ..Encoding::default()
                },
                rows(&melt_soil(indicators, language))?,
            )
        }
    };

    tracing::debug!(chart = %records.chart_kind(), rows = data.len(), "built chart spec");
    Ok(ChartSpec {
        kind: section.chart_kind(),
        title: texts.chart_title.to_string(),
        mark: Mark::Bar,
        encoding,
        data,
    })
}

/// Reshape soil indicators into one row per (indicator, stage) pair.
fn melt_soil(indicators: &[SoilIndicator], language: Language) -> Vec<SoilReading<'_>> {
    let ui = strings(language);
    // All initial readings first, then all final ones, like a column-wise melt.
    let initial = indicators.iter().map(|s| SoilReading {
        indicator: &s.indicator,
        stage: ui.soil_initial,
        value: s.initial_value,
    });
    let last = indicators.iter().map(|s| SoilReading {
        indicator: &s.indicator,
        stage: ui.soil_final,
        value: s.final_value,
    });
    initial.chain(last).collect()
}

fn rows<T: Serialize>(records: &[T]) -> Result<Vec<Value>, ChartError> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(ChartError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use agro_core::entities::{DevelopmentStage, ProductionForecast, ScheduleEvent, YieldEstimate};
    use agro_core::enums::ChartKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::spec::{Aggregate, FieldType};

    fn soil() -> RecordSet {
        RecordSet::Soil(vec![
            SoilIndicator {
                indicator: "pH".into(),
                initial_value: 4.5,
                final_value: 5.5,
            },
            SoilIndicator {
                indicator: "Matéria orgânica (%)".into(),
                initial_value: 1.8,
                final_value: 3.0,
            },
        ])
    }

    #[test]
    fn schedule_is_an_unsorted_gantt() {
        let set = RecordSet::Schedule(vec![ScheduleEvent {
            activity: "Plantio".into(),
            plant: "Mandioca".into(),
            start_date: "2024-01-01".parse().unwrap(),
            end_date: "2024-01-15".parse().unwrap(),
        }]);
        let chart = build_chart(&set, Language::Pt).unwrap();

        assert_eq!(chart.kind, ChartKind::ScheduleGantt);
        assert_eq!(chart.title, "Cronograma de Cultivo Gerado");
        let x = chart.encoding.x.as_ref().unwrap();
        assert_eq!((x.field.as_str(), x.kind), ("start_date", FieldType::Temporal));
        assert_eq!(chart.encoding.x2.as_ref().unwrap().field, "end_date");
        assert!(chart.encoding.y.as_ref().unwrap().sort_none);
        assert_eq!(
            chart.encoding.color.as_ref().unwrap().scheme.as_deref(),
            Some("category10")
        );
        assert_eq!(chart.data[0]["start_date"], "2024-01-01");
    }

    #[test]
    fn development_sums_durations_per_plant() {
        let set = RecordSet::Development(vec![DevelopmentStage {
            plant: "Banana".into(),
            stage: "Muda".into(),
            duration_days: 30,
        }]);
        let chart = build_chart(&set, Language::En).unwrap();
        let x = chart.encoding.x.unwrap();
        assert_eq!(x.aggregate, Some(Aggregate::Sum));
        assert_eq!(x.title, "Duration (days)");
        assert_eq!(chart.encoding.color.unwrap().field, "stage");
        assert_eq!(chart.title, "Crop Development Stages");
    }

    #[test]
    fn yield_shows_factors_as_tooltip() {
        let set = RecordSet::Yield(vec![YieldEstimate {
            plant: "Cacau".into(),
            probability_pct: 70.0,
            factors: "Sombra".into(),
        }]);
        let chart = build_chart(&set, Language::Es).unwrap();
        assert_eq!(chart.encoding.tooltip.len(), 1);
        assert_eq!(chart.encoding.tooltip[0].field, "factors");
        assert_eq!(chart.title, "Probabilidad de Rendimiento por Cultivo");
    }

    #[test]
    fn soil_is_melted_into_long_form() {
        let chart = build_chart(&soil(), Language::Pt).unwrap();
        assert_eq!(
            chart.data,
            vec![
                json!({ "indicator": "pH", "stage": "Valor Inicial", "value": 4.5 }),
                json!({ "indicator": "Matéria orgânica (%)", "stage": "Valor Inicial", "value": 1.8 }),
                json!({ "indicator": "pH", "stage": "Valor Final", "value": 5.5 }),
                json!({ "indicator": "Matéria orgânica (%)", "stage": "Valor Final", "value": 3.0 }),
            ]
        );
        assert_eq!(chart.encoding.y.unwrap().field, "value");
        assert_eq!(chart.encoding.color.unwrap().field, "stage");
    }

    #[test]
    fn soil_stage_labels_follow_language() {
        let chart = build_chart(&soil(), Language::En).unwrap();
        assert_eq!(chart.data[0]["stage"], "Initial Value");
        assert_eq!(chart.data[3]["stage"], "Final Value");
    }

    #[rstest]
    #[case(RecordSet::Schedule(Vec::new()))]
    #[case(RecordSet::Development(Vec::new()))]
    #[case(RecordSet::Yield(Vec::new()))]
    #[case(RecordSet::Production(Vec::new()))]
    #[case(RecordSet::Soil(Vec::new()))]
    fn empty_sets_are_rejected(#[case] set: RecordSet) {
        let err = build_chart(&set, Language::Pt).unwrap_err();
        assert!(matches!(err, ChartError::EmptyDataset { kind } if kind == set.chart_kind()));
    }

    #[test]
    fn production_binds_amount_to_x() {
        let set = RecordSet::Production(vec![ProductionForecast {
            plant: "Açaí".into(),
            production_kg_per_ha: 8000.0,
        }]);
        let doc = build_chart(&set, Language::Pt).unwrap().to_vega_lite();
        assert_eq!(doc["encoding"]["x"]["field"], "production_kg_per_ha");
        assert_eq!(doc["encoding"]["x"]["title"], "Produção (kg/hectare)");
        assert_eq!(doc["encoding"]["y"]["field"], "plant");
        assert_eq!(doc["title"], "Previsão de Produção por Cultura");
    }
}
