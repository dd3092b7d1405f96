use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProductionForecast {
    pub plant: String,
    /// Expected harvest in kilograms per hectare.
    #[schemars(range(min = 0))]
    pub production_kg_per_ha: f64,
}
