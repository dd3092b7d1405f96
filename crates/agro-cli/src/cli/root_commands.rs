use std::path::PathBuf;

use agro_parser::TableFormat;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Ask the model for a plan and chart its tables.
    Plan(PlanArgs),
    /// Chart a saved model response without calling the model.
    Extract(ExtractArgs),
    /// Interactive conversation with chart and checklist tools.
    Chat(ChatArgs),
    /// Print the reference plant dataset.
    Dataset(DatasetArgs),
    /// List selectable Gemini models.
    Models,
    /// Print the effective configuration (API key redacted).
    Config,
}

/// Overrides for the `[extraction]` config section.
#[derive(Clone, Debug, Default, Args)]
pub struct ExtractionArgs {
    /// Table format: auto, fenced-csv, markdown
    #[arg(long)]
    pub table_format: Option<TableFormat>,
    /// CSV field delimiter (one character, or `tab`)
    #[arg(long)]
    pub delimiter: Option<String>,
    /// Fail the schedule chart when an event ends before it starts
    #[arg(long)]
    pub strict_dates: bool,
}

/// Arguments for `agro plan`.
#[derive(Clone, Debug, Args)]
pub struct PlanArgs {
    /// What the plan should achieve
    pub request: Option<String>,
    /// Area size in hectares
    #[arg(long)]
    pub area: Option<f64>,
    /// Location (city/state)
    #[arg(long)]
    pub location: Option<String>,
    /// Expected harvest time in months
    #[arg(long)]
    pub harvest_months: Option<u32>,
    /// Gemini model id (defaults to gemini.model)
    #[arg(short, long)]
    pub model: Option<String>,
    /// Reference dataset (defaults to general.dataset_path)
    #[arg(long)]
    pub dataset: Option<PathBuf>,
    /// Also write the raw response text to this file
    #[arg(long)]
    pub save_response: Option<PathBuf>,
    #[command(flatten)]
    pub extraction: ExtractionArgs,
}

/// Arguments for `agro extract`.
#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Saved response (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Print each section as normalized CSV instead of charts
    #[arg(long)]
    pub emit_csv: bool,
    #[command(flatten)]
    pub extraction: ExtractionArgs,
}

/// Arguments for `agro chat`.
#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Gemini model id (defaults to gemini.model)
    #[arg(short, long)]
    pub model: Option<String>,
    /// Reference dataset (defaults to general.dataset_path)
    #[arg(long)]
    pub dataset: Option<PathBuf>,
    #[command(flatten)]
    pub extraction: ExtractionArgs,
}

/// Arguments for `agro dataset`.
#[derive(Clone, Debug, Args)]
pub struct DatasetArgs {
    /// Dataset file (defaults to general.dataset_path)
    pub path: Option<PathBuf>,
}
