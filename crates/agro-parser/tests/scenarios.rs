//! End-to-end extraction and parsing over realistic plan responses.

use agro_core::entities::{RecordSet, ScheduleEvent, SoilIndicator, YieldEstimate};
use agro_core::enums::SectionKind;
use agro_parser::{
    ParseOptions, ParserError, TableFormat, check_record_set, extract_section, parse_record_set,
    parse_section, parse_table, to_csv,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

const FULL_RESPONSE: &str = "\
Aqui está o plano para sua agrofloresta de 2 hectares em Belém/PA.

Cronograma de Cultivo:
```csv
Atividade,Planta,Início,Fim
Plantio,Mandioca,2024-01-01,2024-01-15
Plantio,Açaí,2024-01-10,2024-02-10
Colheita,Mandioca,2024-10-01,2024-11-30
```

Desenvolvimento dos Cultivos:
```csv
Planta,Estágio,Duração (dias)
Mandioca,Vegetativo,180
Mandioca,Maturação,90
```

Probabilidade de Rendimento:
```csv
Planta,Probabilidade (%),Fatores
Mandioca,85,\"Solo bem drenado, chuvas regulares\"
Açaí,70,Irrigação no verão
```

Previsão de Produção:
```csv
Planta,Produção (kg/hectare)
Mandioca,18000
Açaí,8000
```

Regeneração do Solo:
```csv
Indicador,Valor Inicial,Valor Final
Matéria orgânica (%),1.8,3.2
pH,4.6,5.4
```
";

fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("valid date")
}

#[test]
fn single_row_schedule_block() {
    let text = "Cronograma de Cultivo:\n```csv\nAtividade,Planta,Início,Fim\nPlantio,Mandioca,2024-01-01,2024-01-15\n```";

    let extracted = extract_section(text, SectionKind::Schedule, TableFormat::Auto).unwrap();
    assert_eq!(
        extracted.body,
        "Atividade,Planta,Início,Fim\nPlantio,Mandioca,2024-01-01,2024-01-15"
    );

    let events: Vec<ScheduleEvent> = parse_section(text, &ParseOptions::default()).unwrap();
    assert_eq!(
        events,
        vec![ScheduleEvent {
            activity: "Plantio".into(),
            plant: "Mandioca".into(),
            start_date: date("2024-01-01"),
            end_date: date("2024-01-15"),
        }]
    );
}

#[test]
fn fenced_pipe_table_parses_in_auto_mode() {
    let text = "Cronograma de Cultivo:\n```\n| Atividade | Planta | Início | Fim |\n|---|---|---|---|\n| Plantio | Mandioca | 2024-01-01 | 2024-01-15 |\n```\n";

    let events: Vec<ScheduleEvent> = parse_section(text, &ParseOptions::default()).unwrap();
    assert_eq!(
        events,
        vec![ScheduleEvent {
            activity: "Plantio".into(),
            plant: "Mandioca".into(),
            start_date: date("2024-01-01"),
            end_date: date("2024-01-15"),
        }]
    );
}

#[test]
fn omitted_soil_section_is_not_found() {
    let text = FULL_RESPONSE
        .split("Regeneração do Solo:")
        .next()
        .expect("prefix");
    let err = parse_section::<SoilIndicator>(text, &ParseOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ParserError::SectionNotFound {
            section: SectionKind::Soil
        }
    ));
    // The other sections still parse.
    let events: Vec<ScheduleEvent> = parse_section(text, &ParseOptions::default()).unwrap();
    assert_eq!(events.len(), 3);
}

#[test]
fn markdown_rows_with_wrong_cell_count_are_dropped() {
    let text = "\
| Atividade | Planta | Início | Fim |
| Plantio | Açaí | 2024-01-01 | 2024-01-31 |
| Colheita | Açaí | 2024-08-01 |
| Poda | Cacau | 2024-03-01 | 2024-03-05 |
";
    let events: Vec<ScheduleEvent> = parse_section(text, &ParseOptions::default()).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].activity, "Poda");
}

#[test]
fn markdown_with_every_row_short_yields_no_records() {
    let text = "\
| Atividade | Planta | Início | Fim |
| Plantio | Açaí | 2024-01-01 |
| Colheita | Açaí |
";
    let events: Vec<ScheduleEvent> = parse_section(text, &ParseOptions::default()).unwrap();
    assert!(events.is_empty());
}

#[test]
fn non_numeric_probability_fails_only_its_section() {
    let text = FULL_RESPONSE.replace("Açaí,70,", "Açaí,alta,");

    let err = parse_section::<YieldEstimate>(&text, &ParseOptions::default()).unwrap_err();
    match err {
        ParserError::InvalidFieldValue {
            row, column, value, ..
        } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Probabilidade (%)");
            assert_eq!(value, "alta");
        }
        other => panic!("unexpected error: {other}"),
    }

    for section in SectionKind::ALL {
        if section != SectionKind::Yield {
            assert!(
                parse_record_set(&text, section, &ParseOptions::default()).is_ok(),
                "{section} should still parse"
            );
        }
    }
}

#[test]
fn parsing_twice_yields_identical_records() {
    let options = ParseOptions::default();
    for section in SectionKind::ALL {
        let first = parse_record_set(FULL_RESPONSE, section, &options).unwrap();
        let second = parse_record_set(FULL_RESPONSE, section, &options).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn schedule_survives_csv_round_trip() {
    let events = vec![
        ScheduleEvent {
            activity: "Plantio".into(),
            plant: "Cupuaçu".into(),
            start_date: date("2024-02-01"),
            end_date: date("2024-02-20"),
        },
        ScheduleEvent {
            activity: "Adubação, cobertura".into(),
            plant: "Cupuaçu".into(),
            start_date: date("2024-05-01"),
            end_date: date("2024-05-02"),
        },
    ];
    let csv = to_csv(&events, b',').unwrap();
    let parsed: Vec<ScheduleEvent> =
        parse_table(&csv, TableFormat::FencedCsv, &ParseOptions::default()).unwrap();
    assert_eq!(parsed, events);
}

#[test]
fn semicolon_delimited_block() {
    let text = "Previsão de Produção:\n```\nPlanta;Produção (kg/hectare)\nAçaí;8000,5\n```";
    let options = ParseOptions::default().with_delimiter(b';');
    let set = parse_record_set(text, SectionKind::Production, &options).unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn malformed_csv_row_fails_the_section() {
    let text = "Previsão de Produção:\n```csv\nPlanta,Produção (kg/hectare)\nAçaí,8000,extra\n```";
    let err = parse_record_set(text, SectionKind::Production, &ParseOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ParserError::MalformedTable {
            line: 2,
            expected: 2,
            found: 3
        }
    ));
}

#[test]
fn strict_date_order_rejects_inverted_events() {
    let text = "Cronograma de Cultivo:\n```csv\nAtividade,Planta,Início,Fim\nColheita,Açaí,2024-09-01,2024-08-01\n```";
    let lenient: Vec<ScheduleEvent> = parse_section(text, &ParseOptions::default()).unwrap();
    assert_eq!(lenient.len(), 1);

    let strict = ParseOptions::default().with_date_order(true);
    assert!(parse_section::<ScheduleEvent>(text, &strict).is_err());
}

#[test]
fn typed_records_get_the_same_date_check() {
    let set = RecordSet::Schedule(vec![ScheduleEvent {
        activity: "Colheita".into(),
        plant: "Açaí".into(),
        start_date: date("2024-09-01"),
        end_date: date("2024-08-01"),
    }]);
    assert!(check_record_set(&set, &ParseOptions::default()).is_ok());

    let strict = ParseOptions::default().with_date_order(true);
    let err = check_record_set(&set, &strict).unwrap_err();
    assert!(matches!(err, ParserError::InvalidFieldValue { row: 1, column: "Fim", .. }));
}

#[test]
fn markdown_only_format_ignores_fenced_blocks() {
    let options = ParseOptions::default().with_format(TableFormat::MarkdownTable);
    let err = parse_record_set(FULL_RESPONSE, SectionKind::Soil, &options).unwrap_err();
    assert!(matches!(err, ParserError::SectionNotFound { .. }));
}
