//! # agro-config
//!
//! Layered configuration loading for the agroforestry planner using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGRO_*` prefix, `__` as separator)
//! 2. External overrides (`GEMINI_API_KEY` / `GOOGLE_API_KEY` by default)
//! 3. Project-level `.agro/config.toml`
//! 4. User-level `~/.config/agro/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AGRO_GEMINI__MODEL` -> `gemini.model`,
//! `AGRO_EXTRACTION__CSV_DELIMITER` -> `extraction.csv_delimiter`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use agro_config::AgroConfig;
//!
//! let config = AgroConfig::load_with_dotenv().expect("config");
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod extraction;
mod gemini;
mod general;

pub use error::ConfigError;
pub use extraction::{ExtractionConfig, parse_delimiter};
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;

use std::path::PathBuf;

use agro_parser::ParseOptions;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variables read as the API key, first match wins.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

const REDACTED: &str = "[REDACTED]";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AgroConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl AgroConfig {
    /// Load configuration from all sources (TOML files, API key variables
    /// and `AGRO_*` environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_overrides(&api_key_overrides())
    }

    /// Load `.env` first, then everything [`Self::load`] reads.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with explicit `(key path, value)` overrides, e.g.
    /// `("gemini.api_key", "...")`. `AGRO_*` variables still win.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        Self::figment_with_overrides(overrides)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain with the default overrides.
    pub fn figment() -> Figment {
        Self::figment_with_overrides(&api_key_overrides())
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_with_overrides(overrides: &[(String, String)]) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".agro/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        for (key, value) in overrides {
            figment = figment.merge(Serialized::default(key, value));
        }

        figment.merge(Env::prefixed("AGRO_").split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agro").join("config.toml"))
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extraction.delimiter_byte()?;

        let model = self.gemini.model.trim();
        if model.is_empty()
            || !model
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
        {
            return Err(invalid("gemini.model", format!("not a model id: {model:?}")));
        }
        if self.gemini.timeout_secs == 0 {
            return Err(invalid("gemini.timeout_secs", "must be at least 1".into()));
        }
        if let Some(t) = self.gemini.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(invalid(
                    "gemini.temperature",
                    format!("{t} is outside 0.0..=2.0"),
                ));
            }
        }
        Ok(())
    }

    /// The API key, or [`ConfigError::NotConfigured`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no key was found in any
    /// source.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        if self.gemini.is_configured() {
            Ok(self.gemini.api_key.trim())
        } else {
            Err(ConfigError::NotConfigured {
                section: "gemini".to_string(),
            })
        }
    }

    /// Extraction settings as parser options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a bad delimiter.
    pub fn parse_options(&self) -> Result<ParseOptions, ConfigError> {
        Ok(ParseOptions::default()
            .with_format(self.extraction.format)
            .with_delimiter(self.extraction.delimiter_byte()?)
            .with_date_order(self.extraction.enforce_date_order))
    }

    /// A copy safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.gemini.is_configured() {
            copy.gemini.api_key = REDACTED.to_string();
        }
        copy
    }
}

/// `gemini.api_key` from the first set variable in [`API_KEY_VARS`].
pub fn api_key_overrides() -> Vec<(String, String)> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .map(|value| vec![("gemini.api_key".to_string(), value)])
        .unwrap_or_default()
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agro_core::enums::Language;
    use agro_parser::TableFormat;

    #[test]
    fn default_config_validates() {
        let config = AgroConfig::default();
        assert!(!config.gemini.is_configured());
        assert_eq!(config.general.language, Language::Pt);
        assert_eq!(config.extraction.format, TableFormat::Auto);
        config.validate().unwrap();
    }

    #[test]
    fn parse_options_follow_extraction_section() {
        let mut config = AgroConfig::default();
        config.extraction.csv_delimiter = ";".into();
        config.extraction.enforce_date_order = true;
        let options = config.parse_options().unwrap();
        assert_eq!(options.csv_delimiter, b';');
        assert!(options.enforce_date_order);
    }

    #[test]
    fn bad_values_are_named() {
        let mut config = AgroConfig::default();
        config.gemini.model = "models/../x y".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("gemini.model"));

        let mut config = AgroConfig::default();
        config.gemini.temperature = Some(3.5);
        assert!(config.validate().unwrap_err().to_string().contains("temperature"));

        let mut config = AgroConfig::default();
        config.gemini.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn redacted_hides_key_only_when_set() {
        let mut config = AgroConfig::default();
        assert_eq!(config.redacted().gemini.api_key, "");
        config.gemini.api_key = "AIza-secret".into();
        assert_eq!(config.redacted().gemini.api_key, REDACTED);
        assert_eq!(config.require_api_key().unwrap(), "AIza-secret");
    }

    #[test]
    fn missing_key_is_not_configured() {
        let err = AgroConfig::default().require_api_key().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { section } if section == "gemini"));
    }
}
