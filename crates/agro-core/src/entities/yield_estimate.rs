use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Probability that a crop reaches its expected yield.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct YieldEstimate {
    pub plant: String,
    /// Percentage in `0..=100`.
    #[schemars(range(min = 0, max = 100))]
    pub probability_pct: f64,
    /// Free-text factors behind the estimate.
    pub factors: String,
}
