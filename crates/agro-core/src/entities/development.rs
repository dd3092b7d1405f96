use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A growth stage of one crop and how long it lasts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DevelopmentStage {
    pub plant: String,
    pub stage: String,
    /// Stage length in whole days.
    pub duration_days: u32,
}
