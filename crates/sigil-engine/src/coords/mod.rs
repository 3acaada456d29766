//! Geometry primitives shared by the engine and the widget library.
//!
//! Canonical space:
//! - logical pixels
//! - origin top-left
//! - +X right, +Y down

mod point;
mod rect;
mod triangle;

pub use point::Point;
pub use rect::Rectangle;
pub use triangle::Triangle;
