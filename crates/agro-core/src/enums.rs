//! Section catalog, chart kinds, languages and conversation roles.
//!
//! All enums use `snake_case` serialization. Section labels and column names
//! are matched byte-for-byte (case and accents included) against model output.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// SectionKind
// ---------------------------------------------------------------------------

/// A labeled table section expected in a plan response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Schedule,
    Development,
    Yield,
    Production,
    Soil,
}

impl SectionKind {
    /// Every section, in the order the prompt asks for them.
    pub const ALL: [Self; 5] = [
        Self::Schedule,
        Self::Development,
        Self::Yield,
        Self::Production,
        Self::Soil,
    ];

    /// Labels that introduce the section in a response, in lookup order.
    #[must_use]
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Schedule => &["Cronograma de Cultivo", "Cultivation Schedule"],
            Self::Development => &["Desenvolvimento dos Cultivos"],
            Self::Yield => &["Probabilidade de Rendimento"],
            Self::Production => &["Previsão de Produção"],
            Self::Soil => &["Regeneração do Solo"],
        }
    }

    /// Primary (Portuguese) label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.labels()[0]
    }

    /// Column names the section's table must contain.
    #[must_use]
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Schedule => &["Atividade", "Planta", "Início", "Fim"],
            Self::Development => &["Planta", "Estágio", "Duração (dias)"],
            Self::Yield => &["Planta", "Probabilidade (%)", "Fatores"],
            Self::Production => &["Planta", "Produção (kg/hectare)"],
            Self::Soil => &["Indicador", "Valor Inicial", "Valor Final"],
        }
    }

    /// Header of the first column, used to locate Markdown tables.
    #[must_use]
    pub const fn first_header(self) -> &'static str {
        self.required_fields()[0]
    }

    #[must_use]
    pub const fn chart_kind(self) -> ChartKind {
        match self {
            Self::Schedule => ChartKind::ScheduleGantt,
            Self::Development => ChartKind::DevelopmentStackedBar,
            Self::Yield => ChartKind::YieldBar,
            Self::Production => ChartKind::ProductionBar,
            Self::Soil => ChartKind::SoilBeforeAfter,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Schedule => "schedule",
            Self::Development => "development",
            Self::Yield => "yield",
            Self::Production => "production",
            Self::Soil => "soil",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s.trim())
            .ok_or_else(|| CoreError::UnknownName {
                kind: "section",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

/// Chart tag handed to the chart request builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    ScheduleGantt,
    DevelopmentStackedBar,
    YieldBar,
    ProductionBar,
    SoilBeforeAfter,
}

impl ChartKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScheduleGantt => "schedule_gantt",
            Self::DevelopmentStackedBar => "development_stacked_bar",
            Self::YieldBar => "yield_bar",
            Self::ProductionBar => "production_bar",
            Self::SoilBeforeAfter => "soil_before_after",
        }
    }

    #[must_use]
    pub const fn section(self) -> SectionKind {
        match self {
            Self::ScheduleGantt => SectionKind::Schedule,
            Self::DevelopmentStackedBar => SectionKind::Development,
            Self::YieldBar => SectionKind::Yield,
            Self::ProductionBar => SectionKind::Production,
            Self::SoilBeforeAfter => SectionKind::Soil,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// UI language. Portuguese is the default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Pt,
    Es,
    En,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::Pt, Self::Es, Self::En];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Name shown on the language selector.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pt => "Português",
            Self::Es => "Español",
            Self::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" | "pt-br" | "portugues" | "português" => Ok(Self::Pt),
            "es" | "espanol" | "español" => Ok(Self::Es),
            "en" | "english" => Ok(Self::En),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Model,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
