//! Conversation turns exchanged with the hosted model.
//!
//! A turn is an ordered list of parts. Text parts carry prose, tool-call parts
//! carry a function invocation requested by the model, and tool-result parts
//! carry the answer sent back for that invocation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::Role;

/// A function invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

/// The answer to a [`ToolCall`], keyed by the tool name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ToolResult {
    pub name: String,
    pub response: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    Text(String),
    ToolCall(ToolCall),
    ToolResult(ToolResult),
}

impl Part {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ConversationTurn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl ConversationTurn {
    #[must_use]
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::Text(text.into())],
        }
    }

    #[must_use]
    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::Text(text.into())],
        }
    }

    /// Concatenation of all text parts, `None` when the turn has no text.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self.parts.iter().filter_map(Part::as_text).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    pub fn tool_calls(&self) -> impl Iterator<Item = &ToolCall> {
        self.parts.iter().filter_map(|part| match part {
            Part::ToolCall(call) => Some(call),
            _ => None,
        })
    }

    #[must_use]
    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_joins_only_text_parts() {
        let turn = ConversationTurn {
            role: Role::Model,
            parts: vec![
                Part::Text("Segue o cronograma. ".into()),
                Part::ToolCall(ToolCall {
                    name: "create_gantt_chart".into(),
                    args: json!({"events": []}),
                }),
                Part::Text("Bom plantio!".into()),
            ],
        };

        assert_eq!(
            turn.text().as_deref(),
            Some("Segue o cronograma. Bom plantio!")
        );
        assert_eq!(turn.tool_calls().count(), 1);
        assert!(turn.has_tool_calls());
    }

    #[test]
    fn turn_without_text_returns_none() {
        let turn = ConversationTurn {
            role: Role::User,
            parts: vec![Part::ToolResult(ToolResult {
                name: "create_task_checklist".into(),
                response: json!({"status": "ok"}),
            })],
        };
        assert!(turn.text().is_none());
        assert!(!turn.has_tool_calls());
    }
}
