//! General application configuration.

use std::path::PathBuf;

use agro_core::enums::Language;
use serde::{Deserialize, Serialize};

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data.csv")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// UI and answer language.
    #[serde(default)]
    pub language: Language,

    /// Semicolon-delimited plant dataset embedded in prompts.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            dataset_path: default_dataset_path(),
        }
    }
}
