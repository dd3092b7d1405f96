use std::io::Read;

use agro_chart::{ChartError, visualize_response, warning_for};
use agro_core::entities::RecordSet;
use agro_core::enums::SectionKind;
use agro_core::i18n::section_strings;
use agro_parser::{ParseOptions, ParserError, parse_record_set, to_csv};
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::context::AppContext;
use crate::output::report::print_report;
use crate::ui;

/// Handle `agro extract`.
pub fn handle(args: &ExtractArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read response from stdin")?;
            buf
        }
    };
    let options = ctx.parse_options(&args.extraction)?;

    if args.emit_csv {
        print!("{}", emit_csv(&text, &options, ctx)?);
        return Ok(());
    }

    let report = visualize_response(&text, &options, ctx.language);
    print_report(None, &report, ctx.language, flags.format)
}

/// Every section that parses, as CSV under its heading. Failed sections are
/// reported as warnings.
fn emit_csv(text: &str, options: &ParseOptions, ctx: &AppContext) -> anyhow::Result<String> {
    let mut out = String::new();
    for section in SectionKind::ALL {
        let csv = parse_record_set(text, section, options)
            .and_then(|records| record_set_csv(&records, options.csv_delimiter));
        match csv {
            Ok(csv) => {
                let heading = section_strings(ctx.language, section).heading;
                out.push_str(&format!("# {heading}\n{csv}\n"));
            }
            Err(error) => {
                let warning = warning_for(section, &ChartError::from(error), ctx.language);
                ui::warn(&warning.message);
            }
        }
    }
    Ok(out)
}

fn record_set_csv(records: &RecordSet, delimiter: u8) -> Result<String, ParserError> {
    match records {
        RecordSet::Schedule(rows) => to_csv(rows, delimiter),
        RecordSet::Development(rows) => to_csv(rows, delimiter),
        RecordSet::Yield(rows) => to_csv(rows, delimiter),
        RecordSet::Production(rows) => to_csv(rows, delimiter),
        RecordSet::Soil(rows) => to_csv(rows, delimiter),
    }
}

#[cfg(test)]
mod tests {
    use agro_config::AgroConfig;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::{GlobalFlags, OutputFormat};

    const RESPONSE: &str = "Plano.\n\n**Previsão de Produção:**\n```csv\nPlanta,Produção (kg/hectare)\nAçaí,8000\nCacau,600.5\n```\n";

    fn ctx() -> AppContext {
        let flags = GlobalFlags {
            format: OutputFormat::Table,
            lang: None,
            quiet: true,
            verbose: false,
        };
        AppContext::new(AgroConfig::default(), &flags)
    }

    #[test]
    fn emits_normalized_csv_for_found_sections_only() {
        let out = emit_csv(RESPONSE, &ParseOptions::default(), &ctx()).unwrap();
        assert_eq!(
            out,
            "# Previsão de Produção\nPlanta,Produção (kg/hectare)\nAçaí,8000\nCacau,600.5\n\n"
        );
    }

    #[test]
    fn delimiter_applies_to_output() {
        let options = ParseOptions::default();
        let records = parse_record_set(RESPONSE, SectionKind::Production, &options).unwrap();
        let csv = record_set_csv(&records, b';').unwrap();
        assert!(csv.starts_with("Planta;Produção (kg/hectare)\n"));
    }
}
