mod axis;
mod chart;
mod data;
mod dataset;
mod json_contract;
mod legend;
mod options;
mod title;

pub use axis::{Axis, AxisTicks, AxisType, ScaleLabel, Scales};
pub use chart::{Chart, ChartType};
pub use data::ChartData;
pub use dataset::{DashPattern, DataSet};
pub use json_contract::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfigJsonContractV1};
pub use legend::Legend;
pub use options::{Options, TimeUnit};
pub use title::Title;
