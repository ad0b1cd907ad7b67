use serde_json::{Map, Value};

/// JSON object type produced by every builder.
///
/// With `serde_json`'s `preserve_order` feature the keys keep insertion order,
/// so exported documents list fields in the order the builders write them.
pub type JsonObject = Map<String, Value>;

/// Renders a configuration fragment as a Chart.js JSON object.
pub trait ToJsonObject {
    fn to_object(&self) -> JsonObject;

    /// Wraps [`ToJsonObject::to_object`] into a [`Value`].
    fn to_value(&self) -> Value {
        Value::Object(self.to_object())
    }
}
