use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{JsonObject, Position, ToJsonObject};

/// Chart title block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Title {
    pub display: bool,
    pub position: Position,
    pub font_size: i32,
    pub text: String,
}

impl Default for Title {
    fn default() -> Self {
        Self {
            display: true,
            position: Position::Top,
            font_size: 12,
            text: String::new(),
        }
    }
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().with_text(text)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: i32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl ToJsonObject for Title {
    fn to_object(&self) -> JsonObject {
        let mut object = JsonObject::new();
        object.insert("display".to_owned(), Value::Bool(self.display));
        object.insert("fontSize".to_owned(), Value::from(self.font_size));
        object.insert("position".to_owned(), Value::from(self.position.as_str()));
        object.insert("text".to_owned(), Value::from(self.text.as_str()));
        object
    }
}
