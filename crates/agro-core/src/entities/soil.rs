use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A soil health indicator measured before and after the agroforestry cycle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SoilIndicator {
    pub indicator: String,
    pub initial_value: f64,
    pub final_value: f64,
}

impl SoilIndicator {
    /// Change between the final and initial values.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.final_value - self.initial_value
    }
}
