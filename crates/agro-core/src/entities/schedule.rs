use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One bar of the cultivation schedule (Gantt) chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleEvent {
    /// Activity name, e.g. "Plantio".
    pub activity: String,
    /// Plant the activity applies to.
    pub plant: String,
    /// First day of the activity (ISO `YYYY-MM-DD`).
    pub start_date: NaiveDate,
    /// Last day of the activity (ISO `YYYY-MM-DD`).
    pub end_date: NaiveDate,
}

impl ScheduleEvent {
    /// Whether the event does not end before it starts.
    #[must_use]
    pub fn is_chronological(&self) -> bool {
        self.start_date <= self.end_date
    }
}
