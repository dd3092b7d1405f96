use agro_gemini::MODEL_CHOICES;
use agro_gemini::models::DEFAULT_MODEL;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct ModelRow {
    id: &'static str,
    label: &'static str,
    free_tier: bool,
    default: bool,
}

/// Handle `agro models`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows: Vec<ModelRow> = MODEL_CHOICES
        .iter()
        .map(|choice| ModelRow {
            id: choice.id,
            label: choice.label,
            free_tier: choice.free_tier,
            default: choice.id == DEFAULT_MODEL,
        })
        .collect();
    output(&rows, flags.format)
}
