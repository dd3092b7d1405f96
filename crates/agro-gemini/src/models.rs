//! Selectable Gemini models.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelChoice {
    /// Model id sent to the API.
    pub id: &'static str,
    /// Label shown on the model selector.
    pub label: &'static str,
    pub free_tier: bool,
}

/// Models offered on the selector, in display order.
pub const MODEL_CHOICES: &[ModelChoice] = &[
    ModelChoice {
        id: "gemini-pro",
        label: "gemini-pro",
        free_tier: false,
    },
    ModelChoice {
        id: "gemini-1.0-pro",
        label: "gemini-1.0-pro",
        free_tier: false,
    },
    ModelChoice {
        id: "gemini-1.5-flash",
        label: "gemini-1.5-flash (Free Tier)",
        free_tier: true,
    },
    ModelChoice {
        id: "gemini-1.5-pro",
        label: "gemini-1.5-pro",
        free_tier: false,
    },
];

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Look a model up by id or selector label.
#[must_use]
pub fn find_model(name: &str) -> Option<&'static ModelChoice> {
    let name = name.trim();
    MODEL_CHOICES
        .iter()
        .find(|choice| choice.id == name || choice.label == name)
}
