//! Pointer input: gesture sessions and resize geometry
//!
//! A drag or resize is a [`GestureSession`] with explicit begin, update and
//! end phases. The [`InputRouter`] owns at most one session; the desktop's
//! drag lock is simply "a session exists".

mod gesture;
mod resize;

pub use gesture::{GestureKind, GestureSession, InputRouter};
pub use resize::{resize_frame, ResizeHandle};

/// Result of routing a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// The desktop consumed the event
    Handled,
    /// The event should fall through to the page
    Unhandled,
}
