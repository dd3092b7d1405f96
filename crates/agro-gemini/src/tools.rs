//! Tool declarations and decoding of model tool calls.
//!
//! Each tool's parameters are generated from its argument type with
//! `schemars`, then reduced to the OpenAPI subset the Gemini API accepts.
//! Incoming arguments are checked against the full JSON Schema with
//! `jsonschema` before being deserialized.

use agro_core::conversation::ToolCall;
use agro_core::entities::{
    DevelopmentStage, ImplementationTask, ProductionForecast, RecordSet, ScheduleEvent,
    SoilIndicator, YieldEstimate,
};
use agro_core::enums::SectionKind;
use schemars::generate::SchemaSettings;
use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ToolError;
use crate::wire::FunctionDeclaration;

// ── Argument types ─────────────────────────────────────────────────

/// Arguments of `create_gantt_chart`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GanttChartArgs {
    /// One bar per activity and plant.
    pub events: Vec<ScheduleEvent>,
}

/// Arguments of `create_development_chart`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DevelopmentChartArgs {
    /// Growth stages per plant, in order.
    pub stages: Vec<DevelopmentStage>,
}

/// Arguments of `create_yield_chart`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct YieldChartArgs {
    pub estimates: Vec<YieldEstimate>,
}

/// Arguments of `create_production_chart`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProductionChartArgs {
    pub forecasts: Vec<ProductionForecast>,
}

/// Arguments of `create_soil_chart`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SoilChartArgs {
    pub indicators: Vec<SoilIndicator>,
}

/// Arguments of `create_task_checklist`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TaskChecklistArgs {
    /// Short, actionable task descriptions.
    pub tasks: Vec<String>,
}

// ── Invocation ─────────────────────────────────────────────────────

/// A decoded tool call: typed data for the caller to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolInvocation {
    Chart(RecordSet),
    Checklist(Vec<ImplementationTask>),
}

impl ToolInvocation {
    /// The `functionResponse` payload acknowledging this invocation.
    #[must_use]
    pub fn acknowledgement(&self) -> Value {
        match self {
            Self::Chart(records) => json!({
                "status": "ok",
                "chart": records.chart_kind().as_str(),
                "records": records.len(),
            }),
            Self::Checklist(tasks) => json!({
                "status": "ok",
                "tasks": tasks.len(),
            }),
        }
    }
}

impl From<GanttChartArgs> for ToolInvocation {
    fn from(args: GanttChartArgs) -> Self {
        Self::Chart(RecordSet::Schedule(args.events))
    }
}

impl From<DevelopmentChartArgs> for ToolInvocation {
    fn from(args: DevelopmentChartArgs) -> Self {
        Self::Chart(RecordSet::Development(args.stages))
    }
}

impl From<YieldChartArgs> for ToolInvocation {
    fn from(args: YieldChartArgs) -> Self {
        Self::Chart(RecordSet::Yield(args.estimates))
    }
}

impl From<ProductionChartArgs> for ToolInvocation {
    fn from(args: ProductionChartArgs) -> Self {
        Self::Chart(RecordSet::Production(args.forecasts))
    }
}

impl From<SoilChartArgs> for ToolInvocation {
    fn from(args: SoilChartArgs) -> Self {
        Self::Chart(RecordSet::Soil(args.indicators))
    }
}

impl From<TaskChecklistArgs> for ToolInvocation {
    fn from(args: TaskChecklistArgs) -> Self {
        Self::Checklist(
            args.tasks
                .into_iter()
                .map(|task| task.trim().to_string())
                .filter(|task| !task.is_empty())
                .map(ImplementationTask::new)
                .collect(),
        )
    }
}

// ── Registry ───────────────────────────────────────────────────────

type DecodeFn = fn(Value) -> Result<ToolInvocation, serde_json::Error>;

struct ToolEntry {
    name: &'static str,
    /// Section a chart tool draws; `None` for the checklist.
    section: Option<SectionKind>,
    description: &'static str,
    parameters: Value,
    validator: jsonschema::Validator,
    decode: DecodeFn,
}

fn decode_as<T>(args: Value) -> Result<ToolInvocation, serde_json::Error>
where
    T: DeserializeOwned + Into<ToolInvocation>,
{
    serde_json::from_value::<T>(args).map(Into::into)
}

impl ToolEntry {
    fn new<T>(
        name: &'static str,
        section: Option<SectionKind>,
        description: &'static str,
    ) -> Result<Self, ToolError>
    where
        T: JsonSchema + DeserializeOwned + Into<ToolInvocation>,
    {
        let full = serde_json::to_value(schema_for!(T)).map_err(|e| ToolError::Schema {
            tool: name.to_string(),
            message: e.to_string(),
        })?;
        let validator = jsonschema::validator_for(&full).map_err(|e| ToolError::Schema {
            tool: name.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            name,
            section,
            description,
            parameters: declaration_schema::<T>(),
            validator,
            decode: decode_as::<T>,
        })
    }
}

/// Insert a tool into the registry, keyed by its argument type.
macro_rules! register {
    ($tools:expr, $name:expr, $section:expr, $ty:ty, $description:expr) => {
        $tools.push(ToolEntry::new::<$ty>($name, $section, $description)?);
    };
}

/// The tools offered to the model in conversational mode.
pub struct ToolRegistry {
    tools: Vec<ToolEntry>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolRegistry {
    /// Build the registry with every chart tool and the checklist tool.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Schema`] if a generated schema fails to compile.
    pub fn new() -> Result<Self, ToolError> {
        let mut tools = Vec::new();
        register!(
            tools,
            "create_gantt_chart",
            Some(SectionKind::Schedule),
            GanttChartArgs,
            "Show the cultivation schedule as a Gantt chart. Dates use YYYY-MM-DD."
        );
        register!(
            tools,
            "create_development_chart",
            Some(SectionKind::Development),
            DevelopmentChartArgs,
            "Show crop development stages as a stacked bar chart of durations in days."
        );
        register!(
            tools,
            "create_yield_chart",
            Some(SectionKind::Yield),
            YieldChartArgs,
            "Show the probability (0-100) that each crop reaches its expected yield."
        );
        register!(
            tools,
            "create_production_chart",
            Some(SectionKind::Production),
            ProductionChartArgs,
            "Show the expected production per crop in kg per hectare."
        );
        register!(
            tools,
            "create_soil_chart",
            Some(SectionKind::Soil),
            SoilChartArgs,
            "Show soil indicators before and after the agroforestry cycle."
        );
        register!(
            tools,
            "create_task_checklist",
            None,
            TaskChecklistArgs,
            "Replace the user's implementation checklist with these tasks."
        );
        Ok(Self { tools })
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    /// Section drawn by the chart tool `name`.
    #[must_use]
    pub fn section_for(&self, name: &str) -> Option<SectionKind> {
        self.entry(name).ok().and_then(|t| t.section)
    }

    /// Declarations for the request's `tools` block.
    #[must_use]
    pub fn declarations(&self) -> Vec<FunctionDeclaration> {
        self.tools
            .iter()
            .map(|t| FunctionDeclaration {
                name: t.name.to_string(),
                description: t.description.to_string(),
                parameters: t.parameters.clone(),
            })
            .collect()
    }

    /// Check arguments against the tool's schema.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownTool`] or [`ToolError::InvalidArguments`].
    pub fn validate(&self, name: &str, args: &Value) -> Result<(), ToolError> {
        let entry = self.entry(name)?;
        let errors: Vec<String> = entry
            .validator
            .iter_errors(args)
            .map(|e| format!("{e}"))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ToolError::InvalidArguments {
                tool: name.to_string(),
                errors,
            })
        }
    }

    /// Validate and decode a tool call.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] if the tool is unknown or its arguments do not
    /// fit the declared shape.
    pub fn decode(&self, call: &ToolCall) -> Result<ToolInvocation, ToolError> {
        let entry = self.entry(&call.name)?;
        self.validate(&call.name, &call.args)?;
        (entry.decode)(call.args.clone()).map_err(|source| ToolError::Decode {
            tool: call.name.clone(),
            source,
        })
    }

    fn entry(&self, name: &str) -> Result<&ToolEntry, ToolError> {
        self.tools
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }
}

// ── Declaration schemas ────────────────────────────────────────────

/// Keywords the function-calling schema understands.
const DECLARATION_KEYS: &[&str] = &[
    "type",
    "format",
    "description",
    "nullable",
    "enum",
    "properties",
    "required",
    "items",
    "minimum",
    "maximum",
    "minItems",
    "maxItems",
];

/// Inlined OpenAPI 3 schema for `T`, stripped to [`DECLARATION_KEYS`].
#[must_use]
pub fn declaration_schema<T: JsonSchema>() -> Value {
    let generator = SchemaSettings::openapi3()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator();
    let mut schema = Value::from(generator.into_root_schema_for::<T>());
    sanitize(&mut schema);
    schema
}

fn sanitize(schema: &mut Value) {
    let Value::Object(map) = schema else {
        return;
    };
    map.retain(|key, _| DECLARATION_KEYS.contains(&key.as_str()));

    let unsupported_format = matches!(
        map.get("format"),
        Some(Value::String(format)) if format != "date-time" && format != "enum"
    );
    if unsupported_format {
        map.remove("format");
    }
    if let Some(Value::Object(properties)) = map.get_mut("properties") {
        properties.values_mut().for_each(sanitize);
    }
    if let Some(items) = map.get_mut("items") {
        sanitize(items);
    }
}
