use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{DevelopmentStage, ProductionForecast, ScheduleEvent, SoilIndicator, YieldEstimate};
use crate::enums::{ChartKind, SectionKind};

/// A typed record sequence tagged with the chart it feeds.
///
/// Produced either by the table parser (one per response section) or by a
/// chart tool invocation, whose arguments are already typed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum RecordSet {
    Schedule(Vec<ScheduleEvent>),
    Development(Vec<DevelopmentStage>),
    Yield(Vec<YieldEstimate>),
    Production(Vec<ProductionForecast>),
    Soil(Vec<SoilIndicator>),
}

impl RecordSet {
    #[must_use]
    pub const fn section(&self) -> SectionKind {
        match self {
            Self::Schedule(_) => SectionKind::Schedule,
            Self::Development(_) => SectionKind::Development,
            Self::Yield(_) => SectionKind::Yield,
            Self::Production(_) => SectionKind::Production,
            Self::Soil(_) => SectionKind::Soil,
        }
    }

    #[must_use]
    pub const fn chart_kind(&self) -> ChartKind {
        self.section().chart_kind()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Schedule(v) => v.len(),
            Self::Development(v) => v.len(),
            Self::Yield(v) => v.len(),
            Self::Production(v) => v.len(),
            Self::Soil(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
