use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{JsonObject, ToJsonObject};

use super::Options;

/// Explicit tick range for an axis.
///
/// The range only counts as configured when `minimum != maximum`; the default
/// zero-width range leaves tick placement to Chart.js.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTicks {
    pub minimum: f64,
    pub maximum: f64,
    pub step_size: f64,
}

impl AxisTicks {
    #[must_use]
    pub fn new(minimum: f64, maximum: f64, step_size: f64) -> Self {
        Self {
            minimum,
            maximum,
            step_size,
        }
    }

    #[must_use]
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = minimum;
        self
    }

    #[must_use]
    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.maximum = maximum;
        self
    }

    #[must_use]
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.minimum != self.maximum
    }
}

impl ToJsonObject for AxisTicks {
    /// Empty when the range is not configured.
    ///
    /// All three fields are JSON reals: `max` equals `json!(10.0)`, not
    /// `json!(10)`. Compare through `as_f64` when checking exports.
    fn to_object(&self) -> JsonObject {
        let mut object = JsonObject::new();
        if self.is_valid() {
            object.insert("stepSize".to_owned(), Value::from(self.step_size));
            object.insert("min".to_owned(), Value::from(self.minimum));
            object.insert("max".to_owned(), Value::from(self.maximum));
        }
        object
    }
}

/// Axis title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleLabel {
    pub display: bool,
    pub label: String,
}

impl Default for ScaleLabel {
    fn default() -> Self {
        Self {
            display: true,
            label: String::new(),
        }
    }
}

impl ScaleLabel {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::default().with_label(label)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.label.is_empty()
    }
}

impl ToJsonObject for ScaleLabel {
    fn to_object(&self) -> JsonObject {
        let mut object = JsonObject::new();
        object.insert("display".to_owned(), Value::Bool(self.display));
        object.insert("labelString".to_owned(), Value::from(self.label.as_str()));
        object
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisType {
    #[default]
    Linear,
    Logarithmic,
    Category,
    Time,
}

impl AxisType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
            Self::Category => "category",
            Self::Time => "time",
        }
    }

    /// Reverse lookup; unknown names fall back to [`AxisType::Linear`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" => Self::Linear,
            "logarithmic" => Self::Logarithmic,
            "category" => Self::Category,
            "time" => Self::Time,
            _ => {
                debug!(name, "unknown axis type, using default");
                Self::default()
            }
        }
    }
}

/// One cartesian axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axis {
    pub display: bool,
    pub weight: i32,
    pub ticks: AxisTicks,
    pub scale_label: ScaleLabel,
    pub id: String,
    pub stacked: bool,
    pub axis_type: AxisType,
    /// Time-axis settings, usually built with [`Options::create_time`].
    pub time: Option<Options>,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            display: true,
            weight: 0,
            ticks: AxisTicks::default(),
            scale_label: ScaleLabel::default(),
            id: String::new(),
            stacked: false,
            axis_type: AxisType::Linear,
            time: None,
        }
    }
}

impl Axis {
    #[must_use]
    pub fn new(axis_type: AxisType) -> Self {
        Self {
            axis_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// Sort weight among axes on the same side.
    #[must_use]
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: AxisTicks) -> Self {
        self.ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_scale_label(mut self, scale_label: ScaleLabel) -> Self {
        self.scale_label = scale_label;
        self
    }

    /// Id referenced by `xAxisID` / `yAxisID` on datasets.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_type(mut self, axis_type: AxisType) -> Self {
        self.axis_type = axis_type;
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: Options) -> Self {
        self.time = Some(time);
        self
    }
}

impl ToJsonObject for Axis {
    fn to_object(&self) -> JsonObject {
        let mut object = JsonObject::new();
        object.insert("display".to_owned(), Value::Bool(self.display));
        object.insert("type".to_owned(), Value::from(self.axis_type.as_str()));
        object.insert("weight".to_owned(), Value::from(self.weight));

        if !self.id.is_empty() {
            object.insert("id".to_owned(), Value::from(self.id.as_str()));
        }
        if self.ticks.is_valid() {
            object.insert("ticks".to_owned(), self.ticks.to_value());
        }
        if self.scale_label.is_valid() {
            object.insert("scaleLabel".to_owned(), self.scale_label.to_value());
        }
        if self.stacked {
            object.insert("stacked".to_owned(), Value::Bool(true));
        }
        if let Some(time) = &self.time {
            object.insert("time".to_owned(), time.to_value());
        }
        object
    }
}

/// X and Y axis lists; list order is the order Chart.js lays them out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scales {
    x_axes: Vec<Axis>,
    y_axes: Vec<Axis>,
}

impl Scales {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axes.push(axis);
        self
    }

    pub fn push_x_axis(&mut self, axis: Axis) -> &mut Self {
        self.x_axes.push(axis);
        self
    }

    pub fn push_y_axis(&mut self, axis: Axis) -> &mut Self {
        self.y_axes.push(axis);
        self
    }

    #[must_use]
    pub fn x_axes(&self) -> &[Axis] {
        &self.x_axes
    }

    #[must_use]
    pub fn y_axes(&self) -> &[Axis] {
        &self.y_axes
    }
}

fn axes_to_array(axes: &[Axis]) -> Value {
    Value::Array(axes.iter().map(ToJsonObject::to_value).collect())
}

impl ToJsonObject for Scales {
    fn to_object(&self) -> JsonObject {
        let mut object = JsonObject::new();
        if !self.x_axes.is_empty() {
            object.insert("xAxes".to_owned(), axes_to_array(&self.x_axes));
        }
        if !self.y_axes.is_empty() {
            object.insert("yAxes".to_owned(), axes_to_array(&self.y_axes));
        }
        object
    }
}
