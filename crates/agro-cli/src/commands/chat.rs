//! `agro chat`: a conversation on stdin with chart and checklist tools.

use agro_chart::{ChartError, visualize_records, warning_for};
use agro_core::conversation::ConversationTurn;
use agro_core::entities::RecordSet;
use agro_core::enums::Language;
use agro_gemini::{GeminiClient, ToolFailure, ToolInvocation, ToolRegistry, TurnOutcome, converse};
use agro_parser::ParseOptions;
use agro_session::{ReferenceDataset, SessionContext, chat_instruction};
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::context::AppContext;
use crate::output::report::{render_chart, render_checklist};
use crate::progress::Progress;
use crate::ui;

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
enum ChatCommand {
    Message(String),
    Restart,
    Language(String),
    Tasks,
    /// 1-based task number.
    Done(usize),
    Undo(usize),
    Quit,
    Help,
    Invalid(String),
    Empty,
}

impl ChatCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(command) = line.strip_prefix('/') else {
            return Self::Message(line.to_string());
        };

        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let arg = words.next();
        match (name, arg) {
            ("restart", None) => Self::Restart,
            ("lang", Some(code)) => Self::Language(code.to_string()),
            ("tasks", None) => Self::Tasks,
            ("done", Some(n)) => task_number(n).map_or_else(|| Self::Invalid(line.into()), Self::Done),
            ("undo", Some(n)) => task_number(n).map_or_else(|| Self::Invalid(line.into()), Self::Undo),
            ("quit" | "exit", None) => Self::Quit,
            ("help", None) => Self::Help,
            _ => Self::Invalid(line.to_string()),
        }
    }
}

fn task_number(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|n| *n > 0)
}

const HELP: &str = "/restart  /lang <pt|es|en>  /tasks  /done <n>  /undo <n>  /quit";

/// Handle `agro chat`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = ctx.parse_options(&args.extraction)?;
    let dataset = ctx.dataset(args.dataset.as_deref())?;
    let client = ctx.client(args.model.as_deref())?;
    let tools = ToolRegistry::new().context("failed to build tool declarations")?;
    let mut session = SessionContext::new(ctx.language);

    print_last_text(&session);
    eprintln!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match ChatCommand::parse(&line) {
            ChatCommand::Empty => {}
            ChatCommand::Quit => break,
            ChatCommand::Help => eprintln!("{HELP}"),
            ChatCommand::Invalid(input) => ui::warn(&format!("unknown command: {input} ({HELP})")),
            ChatCommand::Restart => {
                session.restart();
                println!("{}", session.strings().restarted);
                print_last_text(&session);
            }
            ChatCommand::Language(code) => match code.parse::<Language>() {
                Ok(language) => {
                    session.set_language(language);
                    println!("{}", language.display_name());
                }
                Err(error) => ui::warn(&error.to_string()),
            },
            ChatCommand::Tasks => print_checklist(&session, flags)?,
            ChatCommand::Done(n) => mark_task(&mut session, n, true, flags)?,
            ChatCommand::Undo(n) => mark_task(&mut session, n, false, flags)?,
            ChatCommand::Message(text) => {
                let turn = Turn {
                    client: &client,
                    tools: &tools,
                    dataset: &dataset,
                    options: &options,
                };
                send_message(&turn, &mut session, text, ctx, flags).await?;
            }
        }
    }
    Ok(())
}

/// What a model turn needs besides the session.
struct Turn<'a> {
    client: &'a GeminiClient,
    tools: &'a ToolRegistry,
    dataset: &'a ReferenceDataset,
    options: &'a ParseOptions,
}

/// Run one model turn. A failed call is reported and leaves the session as
/// it was, so the user can retry.
async fn send_message(
    turn: &Turn<'_>,
    session: &mut SessionContext,
    text: String,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ConversationTurn::user_text(text);
    let mut history = session.history().to_vec();
    history.push(user.clone());
    let converse_options =
        ctx.converse_options(chat_instruction(session.language(), turn.dataset));

    let spinner = Progress::spinner("…");
    let outcome = match converse(turn.client, turn.tools, &history, &converse_options).await {
        Ok(outcome) => {
            spinner.finish_clear();
            outcome
        }
        Err(error) => {
            spinner.finish_err(&error.to_string());
            ui::warn(&error.to_string());
            return Ok(());
        }
    };

    session.append(std::iter::once(user));
    for warning in apply_outcome(session, outcome, turn.options, flags)? {
        ui::warn(&warning);
    }
    Ok(())
}

/// Print the turn's text, charts and checklist. Returns the warnings for
/// charts that could not be drawn.
fn apply_outcome(
    session: &mut SessionContext,
    outcome: TurnOutcome,
    options: &ParseOptions,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<String>> {
    let TurnOutcome {
        turns,
        invocations,
        tool_failures,
        text,
        hit_round_limit,
    } = outcome;
    session.append(turns);

    if let Some(text) = text {
        println!("{}", text.trim());
    }
    let language = session.language();
    let mut warnings = Vec::new();
    for invocation in invocations {
        match invocation {
            ToolInvocation::Chart(records) => {
                match chart_records(&records, options, language, flags)? {
                    Ok(Some(rendered)) => println!("{rendered}"),
                    Ok(None) => {}
                    Err(warning) => warnings.push(warning),
                }
            }
            ToolInvocation::Checklist(tasks) => {
                session.apply_checklist(tasks);
                print_checklist(session, flags)?;
            }
        }
    }
    warnings.extend(tool_failures.iter().map(|f| failure_warning(f, language)));
    if hit_round_limit {
        warnings.push("the model kept calling tools; stopped waiting for a text answer".into());
    }
    Ok(warnings)
}

/// Render a tool-call chart, or the warning to show instead.
fn chart_records(
    records: &RecordSet,
    options: &ParseOptions,
    language: Language,
    flags: &GlobalFlags,
) -> anyhow::Result<Result<Option<String>, String>> {
    match visualize_records(records, options, language) {
        Ok(Some(chart)) => Ok(Ok(Some(render_chart(&chart, language, flags.format)?))),
        Ok(None) => Ok(Ok(None)),
        Err(error) => {
            tracing::warn!(section = %records.section(), %error, "tool chart rejected");
            Ok(Err(warning_for(records.section(), &error, language).message))
        }
    }
}

fn failure_warning(failure: &ToolFailure, language: Language) -> String {
    match failure.section {
        Some(section) => {
            let error = ChartError::ToolArguments(failure.message.clone());
            warning_for(section, &error, language).message
        }
        None => failure.message.clone(),
    }
}

fn mark_task(
    session: &mut SessionContext,
    number: usize,
    done: bool,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match session.set_task_done(number - 1, done) {
        Ok(()) => print_checklist(session, flags),
        Err(error) => {
            ui::warn(&error.to_string());
            Ok(())
        }
    }
}

fn print_last_text(session: &SessionContext) {
    if let Some(text) = session.history().last().and_then(ConversationTurn::text) {
        println!("{text}");
    }
}

fn print_checklist(session: &SessionContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    println!(
        "{}",
        render_checklist(session.checklist(), session.language(), flags.format)?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use agro_core::entities::{ImplementationTask, ScheduleEvent, SoilIndicator};
    use agro_core::enums::SectionKind;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn parses_slash_commands() {
        assert_eq!(ChatCommand::parse("  "), ChatCommand::Empty);
        assert_eq!(ChatCommand::parse("/restart"), ChatCommand::Restart);
        assert_eq!(ChatCommand::parse("/lang es"), ChatCommand::Language("es".into()));
        assert_eq!(ChatCommand::parse("/tasks"), ChatCommand::Tasks);
        assert_eq!(ChatCommand::parse("/done 2"), ChatCommand::Done(2));
        assert_eq!(ChatCommand::parse("/undo 1"), ChatCommand::Undo(1));
        assert_eq!(ChatCommand::parse("/quit"), ChatCommand::Quit);
        assert_eq!(
            ChatCommand::parse("Quais plantas para 2 ha?"),
            ChatCommand::Message("Quais plantas para 2 ha?".into())
        );
    }

    #[test]
    fn rejects_bad_task_numbers_and_unknown_commands() {
        assert!(matches!(ChatCommand::parse("/done 0"), ChatCommand::Invalid(_)));
        assert!(matches!(ChatCommand::parse("/done x"), ChatCommand::Invalid(_)));
        assert!(matches!(ChatCommand::parse("/lang"), ChatCommand::Invalid(_)));
        assert!(matches!(ChatCommand::parse("/foo"), ChatCommand::Invalid(_)));
    }

    fn raw_flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            lang: None,
            quiet: true,
            verbose: false,
        }
    }

    #[test]
    fn outcome_updates_history_and_checklist() {
        let flags = raw_flags();
        let mut session = SessionContext::new(Language::Pt);
        let outcome = TurnOutcome {
            turns: vec![ConversationTurn::model_text("Feito.")],
            invocations: vec![
                ToolInvocation::Chart(RecordSet::Soil(vec![SoilIndicator {
                    indicator: "Matéria orgânica (%)".into(),
                    initial_value: 1.5,
                    final_value: 3.0,
                }])),
                ToolInvocation::Checklist(vec![ImplementationTask::new("Analisar o solo")]),
            ],
            tool_failures: vec![ToolFailure {
                tool: "create_yield_chart".into(),
                section: Some(SectionKind::Yield),
                message: "bad".into(),
            }],
            text: Some("Feito.".into()),
            hit_round_limit: false,
        };

        let warnings =
            apply_outcome(&mut session, outcome, &ParseOptions::default(), &flags).unwrap();

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.checklist(), &[ImplementationTask::new("Analisar o solo")]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].ends_with("Rejected tool call: bad"));
    }

    #[test]
    fn strict_dates_turn_an_inverted_gantt_call_into_a_warning() {
        let mut session = SessionContext::new(Language::Pt);
        let outcome = TurnOutcome {
            invocations: vec![ToolInvocation::Chart(RecordSet::Schedule(vec![ScheduleEvent {
                activity: "Colheita".into(),
                plant: "Açaí".into(),
                start_date: "2024-09-01".parse().unwrap(),
                end_date: "2024-08-01".parse().unwrap(),
            }]))],
            ..TurnOutcome::default()
        };
        let strict = ParseOptions::default().with_date_order(true);

        let warnings = apply_outcome(&mut session, outcome, &strict, &raw_flags()).unwrap();

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Não foi possível gerar o gráfico"));
        assert!(warnings[0].contains("Fim"));
    }

    #[test]
    fn checklist_failure_is_shown_as_is() {
        let failure = ToolFailure {
            tool: "create_task_checklist".into(),
            section: None,
            message: "invalid arguments".into(),
        };
        assert_eq!(failure_warning(&failure, Language::En), "invalid arguments");
    }
}
