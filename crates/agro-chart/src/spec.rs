//! Declarative chart specification.

use agro_core::enums::ChartKind;
use serde::Serialize;
use serde_json::{Map, Value, json};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bar,
}

impl Mark {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
        }
    }
}

/// Measurement type of a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Quantitative,
    Temporal,
    Nominal,
}

impl FieldType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quantitative => "quantitative",
            Self::Temporal => "temporal",
            Self::Nominal => "nominal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    Sum,
}

/// A data field bound to one visual channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    /// Keep the data order instead of sorting the axis.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sort_none: bool,
    /// Named color scheme, for color channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl FieldDef {
    fn new(field: &str, kind: FieldType, title: &str) -> Self {
        Self {
            field: field.to_string(),
            kind,
            title: title.to_string(),
            aggregate: None,
            sort_none: false,
            scheme: None,
        }
    }

    #[must_use]
    pub fn quantitative(field: &str, title: &str) -> Self {
        Self::new(field, FieldType::Quantitative, title)
    }

    #[must_use]
    pub fn temporal(field: &str, title: &str) -> Self {
        Self::new(field, FieldType::Temporal, title)
    }

    #[must_use]
    pub fn nominal(field: &str, title: &str) -> Self {
        Self::new(field, FieldType::Nominal, title)
    }

    #[must_use]
    pub const fn summed(mut self) -> Self {
        self.aggregate = Some(Aggregate::Sum);
        self
    }

    #[must_use]
    pub const fn unsorted(mut self) -> Self {
        self.sort_none = true;
        self
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = Some(scheme.to_string());
        self
    }

    fn to_vega_lite(&self) -> Value {
        let mut out = Map::new();
        out.insert("field".into(), json!(self.field));
        out.insert("type".into(), json!(self.kind.as_str()));
        out.insert("title".into(), json!(self.title));
        if let Some(Aggregate::Sum) = self.aggregate {
            out.insert("aggregate".into(), json!("sum"));
        }
        if self.sort_none {
            out.insert("sort".into(), Value::Null);
        }
        if let Some(scheme) = &self.scheme {
            out.insert("scale".into(), json!({ "scheme": scheme }));
        }
        Value::Object(out)
    }
}

/// Channel bindings. Unused channels stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x2: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FieldDef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tooltip: Vec<FieldDef>,
}

/// A chart request: what to draw, from which rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub mark: Mark,
    pub encoding: Encoding,
    /// One JSON object per row, keyed by the field names used in `encoding`.
    pub data: Vec<Value>,
}

impl ChartSpec {
    /// Render as a standalone Vega-Lite v5 document with inline data.
    #[must_use]
    pub fn to_vega_lite(&self) -> Value {
        let mut encoding = Map::new();
        if let Some(x) = &self.encoding.x {
            encoding.insert("x".into(), x.to_vega_lite());
        }
        if let Some(x2) = &self.encoding.x2 {
            // x2 shares the scale of x, so only the field is given.
            encoding.insert("x2".into(), json!({ "field": x2.field, "title": x2.title }));
        }
        if let Some(y) = &self.encoding.y {
            encoding.insert("y".into(), y.to_vega_lite());
        }
        if let Some(color) = &self.encoding.color {
            encoding.insert("color".into(), color.to_vega_lite());
        }
        if !self.encoding.tooltip.is_empty() {
            let tooltip: Vec<Value> = self
                .encoding
                .tooltip
                .iter()
                .map(FieldDef::to_vega_lite)
                .collect();
            encoding.insert("tooltip".into(), Value::Array(tooltip));
        }

        json!({
            "$schema": VEGA_LITE_SCHEMA,
            "title": self.title,
            "width": "container",
            "data": { "values": self.data },
            "mark": { "type": self.mark.as_str() },
            "encoding": Value::Object(encoding),
        })
    }
}
