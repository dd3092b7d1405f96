use std::path::Path;
use std::time::Duration;

use agro_config::{AgroConfig, parse_delimiter};
use agro_core::enums::Language;
use agro_gemini::{ClientOptions, ConverseOptions, GeminiClient, models::find_model};
use agro_parser::ParseOptions;
use agro_session::ReferenceDataset;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractionArgs;

/// Configuration plus the choices global flags made on top of it.
#[derive(Debug)]
pub struct AppContext {
    pub config: AgroConfig,
    pub language: Language,
}

impl AppContext {
    pub fn new(config: AgroConfig, flags: &GlobalFlags) -> Self {
        let language = flags.lang.unwrap_or(config.general.language);
        Self { config, language }
    }

    /// Parser options from config, with command-line overrides applied.
    pub fn parse_options(&self, args: &ExtractionArgs) -> anyhow::Result<ParseOptions> {
        let mut options = self.config.parse_options()?;
        if let Some(format) = args.table_format {
            options = options.with_format(format);
        }
        if let Some(delimiter) = &args.delimiter {
            options = options.with_delimiter(parse_delimiter(delimiter)?);
        }
        if args.strict_dates {
            options = options.with_date_order(true);
        }
        Ok(options)
    }

    pub fn dataset(&self, path: Option<&Path>) -> anyhow::Result<ReferenceDataset> {
        let path = path.unwrap_or(self.config.general.dataset_path.as_path());
        ReferenceDataset::load(path)
            .with_context(|| format!("failed to load reference dataset {}", path.display()))
    }

    /// A client for `model`, or the configured model.
    pub fn client(&self, model: Option<&str>) -> anyhow::Result<GeminiClient> {
        let api_key = self.config.require_api_key()?;
        let model = model.unwrap_or(self.config.gemini.model.as_str()).trim();
        if find_model(model).is_none() {
            tracing::warn!(%model, "model is not on the selectable list; sending it as is");
        }
        let model = find_model(model).map_or(model, |choice| choice.id);

        let options = ClientOptions {
            base_url: self.config.gemini.base_url.clone(),
            model: model.to_string(),
            timeout: Duration::from_secs(self.config.gemini.timeout_secs),
        };
        GeminiClient::new(api_key, options).context("failed to build Gemini client")
    }

    pub fn converse_options(&self, system_instruction: String) -> ConverseOptions {
        ConverseOptions {
            system_instruction: Some(system_instruction),
            max_tool_rounds: self.config.gemini.max_tool_rounds,
            temperature: self.config.gemini.temperature,
        }
    }
}
