//! chartjs-rs: fluent builders for Chart.js configuration documents.
//!
//! Every builder renders its fragment of the Chart.js schema through
//! [`ToJsonObject`], and [`Chart`] assembles the final `{type, options, data}`
//! tree. Building never fails: malformed colors and unknown style names
//! degrade to defaults.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{Chart, ChartData, ChartType, DataSet, Options};
pub use crate::core::{Color, JsonObject, ToJsonObject};
pub use error::{ChartError, ChartResult};
