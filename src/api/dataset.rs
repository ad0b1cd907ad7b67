use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::{
    BorderCapStyle, BorderJoinStyle, Color, CubicInterpolationMode, JsonObject, PointStyle,
    SteppedLine, ToJsonObject,
};
use crate::error::{ChartError, ChartResult};

/// Border dash pattern as alternating dash/gap lengths in pixels.
pub type DashPattern = SmallVec<[i32; 4]>;

/// One plotted series plus its styling.
///
/// Defaults mirror the documented Chart.js defaults, so fields left at their
/// default are safe to emit. Colors are written only once configured, and the
/// `Option` fields only when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSet {
    pub background_color: Color,
    pub border_cap_style: BorderCapStyle,
    pub border_color: Color,
    pub border_dash: DashPattern,
    pub border_dash_offset: f64,
    pub border_join_style: BorderJoinStyle,
    pub border_width: f64,
    pub cubic_interpolation_mode: CubicInterpolationMode,
    pub fill: bool,
    pub hover_background_color: Color,
    pub hover_border_cap_style: BorderCapStyle,
    pub hover_border_color: Color,
    pub hover_border_dash: DashPattern,
    pub hover_border_dash_offset: f64,
    pub hover_border_join_style: Option<BorderJoinStyle>,
    pub hover_border_width: Option<f64>,
    pub label: String,
    pub line_tension: f64,
    pub order: i32,
    pub point_background_color: Color,
    pub point_border_color: Color,
    pub point_border_width: f64,
    pub point_hit_radius: f64,
    pub point_hover_background_color: Color,
    pub point_hover_border_color: Color,
    pub point_hover_border_width: f64,
    pub point_hover_radius: f64,
    pub point_radius: f64,
    pub point_rotation: f64,
    pub point_style: PointStyle,
    pub show_line: bool,
    pub span_gaps: bool,
    pub stepped_line: SteppedLine,
    pub x_axis_id: String,
    pub y_axis_id: String,
    data: Vec<Value>,
}

impl Default for DataSet {
    fn default() -> Self {
        Self {
            background_color: Color::default(),
            border_cap_style: BorderCapStyle::Butt,
            border_color: Color::default(),
            border_dash: DashPattern::new(),
            border_dash_offset: 0.0,
            border_join_style: BorderJoinStyle::Miter,
            border_width: 3.0,
            cubic_interpolation_mode: CubicInterpolationMode::Default,
            fill: true,
            hover_background_color: Color::default(),
            hover_border_cap_style: BorderCapStyle::Butt,
            hover_border_color: Color::default(),
            hover_border_dash: DashPattern::new(),
            hover_border_dash_offset: 0.0,
            hover_border_join_style: None,
            hover_border_width: None,
            label: String::new(),
            line_tension: 0.4,
            order: 0,
            point_background_color: Color::default(),
            point_border_color: Color::default(),
            point_border_width: 1.0,
            point_hit_radius: 1.0,
            point_hover_background_color: Color::default(),
            point_hover_border_color: Color::default(),
            point_hover_border_width: 1.0,
            point_hover_radius: 4.0,
            point_radius: 3.0,
            point_rotation: 0.0,
            point_style: PointStyle::Circle,
            show_line: true,
            span_gaps: true,
            stepped_line: SteppedLine::Disabled,
            x_axis_id: String::new(),
            y_axis_id: String::new(),
            data: Vec::new(),
        }
    }
}

impl DataSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    #[must_use]
    pub fn with_hover_background_color(mut self, color: Color) -> Self {
        self.hover_background_color = color;
        self
    }

    #[must_use]
    pub fn with_hover_border_color(mut self, color: Color) -> Self {
        self.hover_border_color = color;
        self
    }

    #[must_use]
    pub fn with_point_background_color(mut self, color: Color) -> Self {
        self.point_background_color = color;
        self
    }

    #[must_use]
    pub fn with_point_border_color(mut self, color: Color) -> Self {
        self.point_border_color = color;
        self
    }

    #[must_use]
    pub fn with_point_hover_background_color(mut self, color: Color) -> Self {
        self.point_hover_background_color = color;
        self
    }

    #[must_use]
    pub fn with_point_hover_border_color(mut self, color: Color) -> Self {
        self.point_hover_border_color = color;
        self
    }

    #[must_use]
    pub fn with_border_cap_style(mut self, style: BorderCapStyle) -> Self {
        self.border_cap_style = style;
        self
    }

    #[must_use]
    pub fn with_hover_border_cap_style(mut self, style: BorderCapStyle) -> Self {
        self.hover_border_cap_style = style;
        self
    }

    #[must_use]
    pub fn with_border_join_style(mut self, style: BorderJoinStyle) -> Self {
        self.border_join_style = style;
        self
    }

    #[must_use]
    pub fn with_hover_border_join_style(mut self, style: BorderJoinStyle) -> Self {
        self.hover_border_join_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_border_dash(mut self, pattern: impl IntoIterator<Item = i32>) -> Self {
        self.border_dash = pattern.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_hover_border_dash(mut self, pattern: impl IntoIterator<Item = i32>) -> Self {
        self.hover_border_dash = pattern.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_border_dash_offset(mut self, offset: f64) -> Self {
        self.border_dash_offset = offset;
        self
    }

    #[must_use]
    pub fn with_hover_border_dash_offset(mut self, offset: f64) -> Self {
        self.hover_border_dash_offset = offset;
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    #[must_use]
    pub fn with_hover_border_width(mut self, width: f64) -> Self {
        self.hover_border_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_cubic_interpolation_mode(mut self, mode: CubicInterpolationMode) -> Self {
        self.cubic_interpolation_mode = mode;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Bezier curve tension; `0.0` draws straight segments.
    #[must_use]
    pub fn with_line_tension(mut self, tension: f64) -> Self {
        self.line_tension = tension;
        self
    }

    /// Drawing order; higher orders are drawn first.
    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_point_border_width(mut self, width: f64) -> Self {
        self.point_border_width = width;
        self
    }

    #[must_use]
    pub fn with_point_hit_radius(mut self, radius: f64) -> Self {
        self.point_hit_radius = radius;
        self
    }

    #[must_use]
    pub fn with_point_hover_border_width(mut self, width: f64) -> Self {
        self.point_hover_border_width = width;
        self
    }

    #[must_use]
    pub fn with_point_hover_radius(mut self, radius: f64) -> Self {
        self.point_hover_radius = radius;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    /// Point rotation in degrees.
    #[must_use]
    pub fn with_point_rotation(mut self, degrees: f64) -> Self {
        self.point_rotation = degrees;
        self
    }

    #[must_use]
    pub fn with_point_style(mut self, style: PointStyle) -> Self {
        self.point_style = style;
        self
    }

    #[must_use]
    pub fn with_show_line(mut self, show_line: bool) -> Self {
        self.show_line = show_line;
        self
    }

    #[must_use]
    pub fn with_span_gaps(mut self, span_gaps: bool) -> Self {
        self.span_gaps = span_gaps;
        self
    }

    #[must_use]
    pub fn with_stepped_line(mut self, mode: SteppedLine) -> Self {
        self.stepped_line = mode;
        self
    }

    #[must_use]
    pub fn with_x_axis_id(mut self, id: impl Into<String>) -> Self {
        self.x_axis_id = id.into();
        self
    }

    #[must_use]
    pub fn with_y_axis_id(mut self, id: impl Into<String>) -> Self {
        self.y_axis_id = id.into();
        self
    }

    /// Appends a raw JSON entry (a bare number for category charts, for instance).
    pub fn push_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.data.push(value.into());
        self
    }

    /// Appends a point rendered through its [`ToJsonObject`] form.
    pub fn push_point<P: ToJsonObject>(&mut self, point: &P) -> &mut Self {
        self.data.push(point.to_value());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.push_value(value);
        self
    }

    #[must_use]
    pub fn with_point<P: ToJsonObject>(mut self, point: &P) -> Self {
        self.push_point(point);
        self
    }

    #[must_use]
    pub fn with_points<'a, P, I>(mut self, points: I) -> Self
    where
        P: ToJsonObject + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        self.data.extend(points.into_iter().map(ToJsonObject::to_value));
        self
    }

    #[must_use]
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Vec<Value> {
        &mut self.data
    }

    /// Checks that every numeric style field is finite.
    ///
    /// JSON has no encoding for NaN or infinities, so persisted builder state
    /// could not be restored with such a value in it.
    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("border_dash_offset", Some(self.border_dash_offset)),
            ("border_width", Some(self.border_width)),
            ("hover_border_dash_offset", Some(self.hover_border_dash_offset)),
            ("hover_border_width", self.hover_border_width),
            ("line_tension", Some(self.line_tension)),
            ("point_border_width", Some(self.point_border_width)),
            ("point_hit_radius", Some(self.point_hit_radius)),
            ("point_hover_border_width", Some(self.point_hover_border_width)),
            ("point_hover_radius", Some(self.point_hover_radius)),
            ("point_radius", Some(self.point_radius)),
            ("point_rotation", Some(self.point_rotation)),
        ] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "dataset field `{field}` must be finite"
                )));
            }
        }
        Ok(())
    }
}

fn insert(object: &mut JsonObject, key: &str, value: impl Into<Value>) {
    object.insert(key.to_owned(), value.into());
}

fn insert_color(object: &mut JsonObject, key: &str, color: Color) {
    if color.is_valid() {
        insert(object, key, color.to_string());
    }
}

fn insert_dash(object: &mut JsonObject, key: &str, pattern: &DashPattern) {
    if !pattern.is_empty() {
        insert(object, key, pattern.as_slice());
    }
}

fn insert_non_empty(object: &mut JsonObject, key: &str, text: &str) {
    if !text.is_empty() {
        insert(object, key, text);
    }
}

impl ToJsonObject for DataSet {
    fn to_object(&self) -> JsonObject {
        let mut object = JsonObject::new();

        insert_color(&mut object, "backgroundColor", self.background_color);
        insert(&mut object, "borderCapStyle", self.border_cap_style.as_str());
        insert_color(&mut object, "borderColor", self.border_color);
        insert_dash(&mut object, "borderDash", &self.border_dash);
        insert(&mut object, "borderDashOffset", self.border_dash_offset);
        insert(&mut object, "borderJoinStyle", self.border_join_style.as_str());
        insert(&mut object, "borderWidth", self.border_width);
        insert(
            &mut object,
            "cubicInterpolationMode",
            self.cubic_interpolation_mode.as_str(),
        );
        insert(&mut object, "fill", self.fill);

        insert_color(&mut object, "hoverBackgroundColor", self.hover_background_color);
        insert(
            &mut object,
            "hoverBorderCapStyle",
            self.hover_border_cap_style.as_str(),
        );
        insert_color(&mut object, "hoverBorderColor", self.hover_border_color);
        insert_dash(&mut object, "hoverBorderDash", &self.hover_border_dash);
        insert(&mut object, "hoverBorderDashOffset", self.hover_border_dash_offset);
        if let Some(style) = self.hover_border_join_style {
            insert(&mut object, "hoverBorderJoinStyle", style.as_str());
        }
        if let Some(width) = self.hover_border_width {
            insert(&mut object, "hoverBorderWidth", width);
        }

        insert_non_empty(&mut object, "label", &self.label);
        insert(&mut object, "lineTension", self.line_tension);
        insert(&mut object, "order", self.order);

        insert_color(&mut object, "pointBackgroundColor", self.point_background_color);
        insert_color(&mut object, "pointBorderColor", self.point_border_color);
        insert(&mut object, "pointBorderWidth", self.point_border_width);
        insert(&mut object, "pointHitRadius", self.point_hit_radius);
        insert_color(
            &mut object,
            "pointHoverBackgroundColor",
            self.point_hover_background_color,
        );
        insert_color(
            &mut object,
            "pointHoverBorderColor",
            self.point_hover_border_color,
        );
        insert(
            &mut object,
            "pointHoverBorderWidth",
            self.point_hover_border_width,
        );
        insert(&mut object, "pointHoverRadius", self.point_hover_radius);
        insert(&mut object, "pointRadius", self.point_radius);
        insert(&mut object, "pointRotation", self.point_rotation);
        insert(&mut object, "pointStyle", self.point_style.as_str());

        insert(&mut object, "showLine", self.show_line);
        insert(&mut object, "spanGaps", self.span_gaps);
        insert(&mut object, "steppedLine", self.stepped_line.to_json());

        insert_non_empty(&mut object, "xAxisID", &self.x_axis_id);
        insert_non_empty(&mut object, "yAxisID", &self.y_axis_id);

        insert(&mut object, "data", self.data.clone());
        object
    }
}
