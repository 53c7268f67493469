mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{Border, Direction, Overflow, Position, Size, TextStyle};
pub use style::Style;
