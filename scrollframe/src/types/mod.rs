mod color;
mod enums;
mod rect;
mod style;

pub use color::Color;
pub use enums::{Axis, Cursor, Display, Length, Overflow, Position, Radius};
pub use rect::Rect;
pub use style::{Style, Translate};
