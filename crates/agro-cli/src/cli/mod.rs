use agro_core::enums::Language;
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `agro` binary.
#[derive(Debug, Parser)]
#[command(
    name = "agro",
    version,
    about = "Agroforestry plans for the Amazon biome, with charts, from Google Gemini"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Interface language: pt, es, en (defaults to general.language)
    #[arg(short = 'L', long, global = true)]
    pub lang: Option<Language>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            lang: self.lang,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
