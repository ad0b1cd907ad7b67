//! Dataset style enumerations and their Chart.js names.
//!
//! `as_str` is total over every variant. `from_name` is the reverse lookup and
//! never fails: names Chart.js would not recognize map to the default variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointStyle {
    #[default]
    Circle,
    Cross,
    CrossRot,
    Dash,
    Line,
    Rect,
    RectRounded,
    RectRot,
    Star,
    Triangle,
}

impl PointStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Cross => "cross",
            Self::CrossRot => "crossRot",
            Self::Dash => "dash",
            Self::Line => "line",
            Self::Rect => "rect",
            Self::RectRounded => "rectRounded",
            Self::RectRot => "rectRot",
            Self::Star => "star",
            Self::Triangle => "triangle",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "circle" => Self::Circle,
            "cross" => Self::Cross,
            "crossRot" => Self::CrossRot,
            "dash" => Self::Dash,
            "line" => Self::Line,
            "rect" => Self::Rect,
            "rectRounded" => Self::RectRounded,
            "rectRot" => Self::RectRot,
            "star" => Self::Star,
            "triangle" => Self::Triangle,
            _ => {
                debug!(name, "unknown point style, using default");
                Self::default()
            }
        }
    }
}

/// Line cap used at the ends of a stroked border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderCapStyle {
    #[default]
    Butt,
    Round,
    Square,
}

impl BorderCapStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "butt" => Self::Butt,
            "round" => Self::Round,
            "square" => Self::Square,
            _ => {
                debug!(name, "unknown border cap style, using default");
                Self::default()
            }
        }
    }
}

/// Corner join used where border segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderJoinStyle {
    Bevel,
    Round,
    #[default]
    Miter,
}

impl BorderJoinStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bevel => "bevel",
            Self::Round => "round",
            Self::Miter => "miter",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "bevel" => Self::Bevel,
            "round" => Self::Round,
            "miter" => Self::Miter,
            _ => {
                debug!(name, "unknown border join style, using default");
                Self::default()
            }
        }
    }
}

/// Stepped-line rendering mode.
///
/// `Disabled` and `Enabled` are written as JSON booleans; the positional
/// variants are written as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteppedLine {
    #[default]
    Disabled,
    Enabled,
    Before,
    After,
    Middle,
}

impl SteppedLine {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "false",
            Self::Enabled => "true",
            Self::Before => "before",
            Self::After => "after",
            Self::Middle => "middle",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "false" => Self::Disabled,
            "true" => Self::Enabled,
            "before" => Self::Before,
            "after" => Self::After,
            "middle" => Self::Middle,
            _ => {
                debug!(name, "unknown stepped line mode, using default");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn to_json(self) -> Value {
        match self {
            Self::Disabled => Value::Bool(false),
            Self::Enabled => Value::Bool(true),
            Self::Before | Self::After | Self::Middle => Value::from(self.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubicInterpolationMode {
    #[default]
    Default,
    Monotone,
}

impl CubicInterpolationMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Monotone => "monotone",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "default" => Self::Default,
            "monotone" => Self::Monotone,
            _ => {
                debug!(name, "unknown cubic interpolation mode, using default");
                Self::default()
            }
        }
    }
}
