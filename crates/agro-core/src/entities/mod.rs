//! Typed records produced from model output.
//!
//! Every struct derives `Serialize`, `Deserialize` and `JsonSchema`: the
//! schemas double as tool-call argument schemas, and the serialized field
//! names are the column names used in chart encodings.

mod development;
mod production;
mod record_set;
mod schedule;
mod soil;
mod task;
mod yield_estimate;

pub use development::DevelopmentStage;
pub use production::ProductionForecast;
pub use record_set::RecordSet;
pub use schedule::ScheduleEvent;
pub use soil::SoilIndicator;
pub use task::ImplementationTask;
pub use yield_estimate::YieldEstimate;
