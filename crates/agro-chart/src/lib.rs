//! # agro-chart
//!
//! Chart request building for the agroforestry planner.
//!
//! [`build_chart`] turns a typed [`RecordSet`](agro_core::entities::RecordSet)
//! into a declarative [`ChartSpec`] (mark, channel bindings, title, data).
//! Nothing is rendered here: [`ChartSpec::to_vega_lite`] hands a Vega-Lite v5
//! document to whatever renders it.
//!
//! [`visualize_response`] runs extraction, parsing and building for every
//! section of a response and never fails; each section that cannot be charted
//! becomes a localized [`SectionWarning`].

pub mod builder;
pub mod error;
pub mod pipeline;
pub mod spec;

pub use builder::build_chart;
pub use error::{ChartError, FailureKind};
pub use pipeline::{
    SectionWarning, VisualizationReport, visualize_records, visualize_response, visualize_section,
    warning_for,
};
pub use spec::{Aggregate, ChartSpec, Encoding, FieldDef, FieldType, Mark};
