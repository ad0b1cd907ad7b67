use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Align, JsonObject, Position, ToJsonObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legend {
    pub display: bool,
    pub full_width: bool,
    pub reverse: bool,
    pub right_to_left: bool,
    pub position: Position,
    pub align: Align,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            display: true,
            full_width: true,
            reverse: false,
            right_to_left: false,
            position: Position::Top,
            align: Align::Center,
        }
    }
}

impl Legend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// Whether the legend box spans the whole canvas width.
    #[must_use]
    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Lists datasets in reverse order.
    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub fn with_right_to_left(mut self, right_to_left: bool) -> Self {
        self.right_to_left = right_to_left;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

impl ToJsonObject for Legend {
    fn to_object(&self) -> JsonObject {
        let mut object = JsonObject::new();
        object.insert("align".to_owned(), Value::from(self.align.as_str()));
        object.insert("position".to_owned(), Value::from(self.position.as_str()));
        object.insert("display".to_owned(), Value::Bool(self.display));
        object.insert("rtl".to_owned(), Value::Bool(self.right_to_left));
        object.insert("reverse".to_owned(), Value::Bool(self.reverse));
        object.insert("fullWidth".to_owned(), Value::Bool(self.full_width));
        object
    }
}
