use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{JsonObject, ToJsonObject};

use super::{ChartData, Options};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Doughnut,
    Pie,
    Radar,
    Scatter,
    PolarArea,
    Bubble,
}

impl ChartType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Doughnut => "doughnut",
            Self::Pie => "pie",
            Self::Radar => "radar",
            Self::Scatter => "scatter",
            Self::PolarArea => "polarArea",
            Self::Bubble => "bubble",
        }
    }

    /// Reverse lookup; unknown names fall back to [`ChartType::Line`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "line" => Self::Line,
            "bar" => Self::Bar,
            "doughnut" => Self::Doughnut,
            "pie" => Self::Pie,
            "radar" => Self::Radar,
            "scatter" => Self::Scatter,
            "polarArea" => Self::PolarArea,
            "bubble" => Self::Bubble,
            _ => {
                debug!(name, "unknown chart type, using default");
                Self::default()
            }
        }
    }
}

/// Root of a Chart.js configuration document.
///
/// Exports as `{type, options, data}`. Whether the chosen type suits the
/// datasets and axes is left to Chart.js.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Chart {
    chart_type: ChartType,
    options: Options,
    data: ChartData,
}

impl Chart {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: ChartData) -> Self {
        self.data = data;
        self
    }

    pub fn set_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ChartData {
        &mut self.data
    }
}

impl ToJsonObject for Chart {
    fn to_object(&self) -> JsonObject {
        trace!(
            chart_type = self.chart_type.as_str(),
            labels = self.data.labels().len(),
            datasets = self.data.datasets().len(),
            options = self.options.len(),
            "export chart object"
        );
        let mut object = JsonObject::new();
        object.insert("type".to_owned(), Value::from(self.chart_type.as_str()));
        object.insert("options".to_owned(), self.options.to_value());
        object.insert("data".to_owned(), self.data.to_value());
        object
    }
}
