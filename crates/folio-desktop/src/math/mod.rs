//! Core geometry types for the desktop
//!
//! Positions and sizes are in CSS pixels with the origin at the top-left
//! corner of the viewport.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
