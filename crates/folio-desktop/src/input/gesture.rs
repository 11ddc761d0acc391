//! Gesture sessions for window move and resize

use tracing::{debug, trace};

use super::resize::{resize_frame, ResizeHandle};
use crate::app::AppId;
use crate::math::{Rect, Size, Vec2};

/// What a gesture does to its window
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureKind {
    /// Dragging by the title bar
    Move {
        /// Pointer position relative to the window's top-left corner
        offset: Vec2,
    },
    /// Dragging a resize handle
    Resize {
        /// Handle being dragged
        handle: ResizeHandle,
        /// Window frame when the gesture began
        start: Rect,
        /// Pointer position when the gesture began
        start_pointer: Vec2,
    },
}

/// One in-progress drag or resize
///
/// Updates are always computed from the start-of-gesture reference, never
/// from the previous update, so a dropped or reordered move event cannot
/// accumulate error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Window being manipulated
    pub window: AppId,
    /// Gesture type and its start reference
    pub kind: GestureKind,
}

impl GestureSession {
    /// Begin moving `window` whose frame is at `frame` with the pointer at `pointer`
    pub fn moving(window: AppId, frame: Rect, pointer: Vec2) -> Self {
        Self {
            window,
            kind: GestureKind::Move {
                offset: pointer - frame.position(),
            },
        }
    }

    /// Begin resizing `window` from `handle`
    pub fn resizing(window: AppId, handle: ResizeHandle, frame: Rect, pointer: Vec2) -> Self {
        Self {
            window,
            kind: GestureKind::Resize {
                handle,
                start: frame,
                start_pointer: pointer,
            },
        }
    }

    /// Check if this is a resize gesture
    pub fn is_resize(&self) -> bool {
        matches!(self.kind, GestureKind::Resize { .. })
    }

    /// Frame for the pointer at `pointer`, given the window's `current` frame
    pub fn frame_at(&self, pointer: Vec2, current: Rect, min: Size) -> Rect {
        match self.kind {
            GestureKind::Move { offset } => {
                Rect::from_pos_size(pointer - offset, current.size())
            }
            GestureKind::Resize {
                handle,
                start,
                start_pointer,
            } => resize_frame(handle, start, current, pointer - start_pointer, min),
        }
    }
}

/// Owns the active gesture session
///
/// Beginning a session while another is active ends the old one first, so
/// there is never more than one window under a gesture.
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    session: Option<GestureSession>,
}

impl InputRouter {
    /// Create a router with no active gesture
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session, returning any session it replaced
    pub fn begin(&mut self, session: GestureSession) -> Option<GestureSession> {
        let replaced = self.session.replace(session);
        if let Some(old) = replaced {
            debug!(window = %old.window, "gesture replaced");
        }
        debug!(window = %session.window, resize = session.is_resize(), "gesture started");
        replaced
    }

    /// Get the active session
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Compute the frame for a pointer move, if a gesture is active
    pub fn update(&self, pointer: Vec2, current: Rect, min: Size) -> Option<(AppId, Rect)> {
        let session = self.session.as_ref()?;
        let frame = session.frame_at(pointer, current, min);
        trace!(
            window = %session.window,
            x = frame.x,
            y = frame.y,
            w = frame.width,
            h = frame.height,
            "gesture update"
        );
        Some((session.window, frame))
    }

    /// End the active session
    pub fn end(&mut self) -> Option<GestureSession> {
        let ended = self.session.take();
        if let Some(session) = &ended {
            debug!(window = %session.window, "gesture ended");
        }
        ended
    }

    /// End the session if it belongs to `window`
    ///
    /// Used when a window disappears mid-gesture.
    pub fn cancel_for(&mut self, window: AppId) -> bool {
        if self.is_dragging_window(window) {
            self.session = None;
            debug!(window = %window, "gesture cancelled");
            true
        } else {
            false
        }
    }

    /// Check if any gesture is active (the drag lock)
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Check if `window` is under a gesture
    pub fn is_dragging_window(&self, window: AppId) -> bool {
        self.session.map(|s| s.window) == Some(window)
    }
}
