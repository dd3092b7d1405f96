use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of the editable implementation checklist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImplementationTask {
    pub task: String,
    #[serde(default)]
    pub done: bool,
}

impl ImplementationTask {
    /// A new, not yet completed task.
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            done: false,
        }
    }
}
