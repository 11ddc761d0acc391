//! Viewport state and layout selection

use serde::Serialize;

use crate::math::{Rect, Size};

/// Which layout the desktop renders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Free-floating windows, icons and taskbar
    #[default]
    Desktop,
    /// Single-column accordion with one expanded section
    Mobile,
}

impl LayoutMode {
    /// Pick the layout for a viewport width
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    /// Check if this is the mobile layout
    pub fn is_mobile(&self) -> bool {
        matches!(self, LayoutMode::Mobile)
    }
}

/// Browser viewport dimensions
///
/// Before the host reports a size (e.g. while prerendering) the viewport
/// holds a fixed fallback so placement math always has something to use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Viewport size in pixels
    pub size: Size,
    known: bool,
}

impl Viewport {
    /// Viewport whose real size is not known yet
    pub fn fallback(fallback: Size) -> Self {
        Self {
            size: fallback,
            known: false,
        }
    }

    /// Viewport from measured dimensions
    ///
    /// Non-finite or non-positive dimensions are treated as unknown.
    pub fn measured(width: f32, height: f32, fallback: Size) -> Self {
        let size = Size::new(width, height);
        if size.is_usable() {
            Self { size, known: true }
        } else {
            Self::fallback(fallback)
        }
    }

    /// Whether the size came from the host rather than the fallback
    pub fn is_known(&self) -> bool {
        self.known
    }

    /// Area available to windows: the viewport minus the taskbar band
    pub fn work_area(&self, taskbar_height: f32) -> Size {
        Size::new(self.size.width, (self.size.height - taskbar_height).max(0.0))
    }

    /// Frame occupied by a maximized window
    pub fn maximized_frame(&self, taskbar_height: f32) -> Rect {
        let area = self.work_area(taskbar_height);
        Rect::new(0.0, 0.0, area.width, area.height)
    }
}
