use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::object::{JsonObject, ToJsonObject};

/// Point with categorical (or preformatted) coordinates, e.g. time strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringDataPoint {
    pub x: String,
    pub y: String,
}

impl StringDataPoint {
    #[must_use]
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntegerDataPoint {
    pub x: i64,
    pub y: i64,
}

impl IntegerDataPoint {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RealDataPoint {
    pub x: f64,
    pub y: f64,
}

impl RealDataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn xy_object(x: Value, y: Value) -> JsonObject {
    let mut object = JsonObject::new();
    object.insert("x".to_owned(), x);
    object.insert("y".to_owned(), y);
    object
}

impl ToJsonObject for StringDataPoint {
    fn to_object(&self) -> JsonObject {
        xy_object(Value::from(self.x.as_str()), Value::from(self.y.as_str()))
    }
}

impl ToJsonObject for IntegerDataPoint {
    fn to_object(&self) -> JsonObject {
        xy_object(Value::from(self.x), Value::from(self.y))
    }
}

impl ToJsonObject for RealDataPoint {
    /// Non-finite coordinates are written as `null`.
    fn to_object(&self) -> JsonObject {
        xy_object(Value::from(self.x), Value::from(self.y))
    }
}
