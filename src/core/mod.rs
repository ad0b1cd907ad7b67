pub mod color;
pub mod data_point;
pub mod flags;
pub mod object;
pub mod style;

pub use color::{Color, STANDARD_PALETTE_HEX};
pub use data_point::{IntegerDataPoint, RealDataPoint, StringDataPoint};
pub use flags::{Align, Position};
pub use object::{JsonObject, ToJsonObject};
pub use style::{BorderCapStyle, BorderJoinStyle, CubicInterpolationMode, PointStyle, SteppedLine};
