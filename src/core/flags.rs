//! Placement flags shared by titles and legends.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Side of the chart area a box is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Top,
    Left,
    Bottom,
    Right,
}

impl Position {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        }
    }

    /// Reverse lookup; unknown names fall back to [`Position::Top`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "top" => Self::Top,
            "left" => Self::Left,
            "bottom" => Self::Bottom,
            "right" => Self::Right,
            _ => {
                debug!(name, "unknown position, using default");
                Self::default()
            }
        }
    }
}

/// Alignment of a box along its attached side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    /// Reverse lookup; unknown names fall back to [`Align::Center`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "start" => Self::Start,
            "center" => Self::Center,
            "end" => Self::End,
            _ => {
                debug!(name, "unknown align, using default");
                Self::default()
            }
        }
    }
}
