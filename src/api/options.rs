use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{JsonObject, ToJsonObject};

use super::{Legend, Scales, Title};

/// Open key/value bag for the `options` section of a chart.
///
/// Keys are not checked against the Chart.js schema. The typed setters only
/// render their component under its well-known key. `IndexMap` keeps
/// insertion order so exported documents are stable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    values: IndexMap<String, Value>,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the `{unit, displayFormats: {<unit>: <format>}}` shape used by
    /// time axes.
    #[must_use]
    pub fn create_time(unit: impl AsRef<str>, format: impl Into<String>) -> Self {
        let unit = unit.as_ref();
        let display_formats = Self::new().with_property(unit, format.into());
        Self::new()
            .with_property("unit", unit)
            .with_property("displayFormats", display_formats.to_value())
    }

    /// Inserts or replaces `key`, keeping its original position on replace.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn set_scales(&mut self, scales: &Scales) -> &mut Self {
        self.set_property("scales", scales.to_value())
    }

    pub fn set_legend(&mut self, legend: &Legend) -> &mut Self {
        self.set_property("legend", legend.to_value())
    }

    pub fn set_title(&mut self, title: &Title) -> &mut Self {
        self.set_property("title", title.to_value())
    }

    #[must_use]
    pub fn with_scales(mut self, scales: &Scales) -> Self {
        self.set_scales(scales);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: &Legend) -> Self {
        self.set_legend(legend);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: &Title) -> Self {
        self.set_title(title);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Removes `key` while preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn object(&self) -> &IndexMap<String, Value> {
        &self.values
    }
}

impl ToJsonObject for Options {
    /// Returns a deep copy; mutating it never touches this bag.
    fn to_object(&self) -> JsonObject {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Time units understood by Chart.js time axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl AsRef<str> for TimeUnit {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
