//! Window chrome layout and hit testing

use serde::Serialize;

use crate::input::ResizeHandle;
use crate::math::{Rect, Vec2};

/// Region of a window under a point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "region", content = "handle", rename_all = "snake_case")]
pub enum WindowRegion {
    /// Draggable title bar
    TitleBar,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize/restore button
    MaximizeButton,
    /// Content area
    Content,
    /// One of the eight resize handles
    Resize(ResizeHandle),
}

/// Frame style constants shared with the stylesheet
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub resize_handle_size: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 32.0,
    resize_handle_size: 6.0,
    button_size: 20.0,
    button_spacing: 6.0,
    button_margin: 8.0,
};

impl FrameStyle {
    /// Find the region of `frame` under `point`
    ///
    /// Resize handles are only reported when `resizable` is set; maximized
    /// windows pass `false` so their edges behave like the title bar and
    /// content underneath.
    pub fn region_at(&self, frame: Rect, point: Vec2, resizable: bool) -> Option<WindowRegion> {
        if !frame.contains(point) {
            return None;
        }

        if resizable {
            let band = self.resize_handle_size;
            let handle = ResizeHandle::from_edges(
                point.y < frame.y + band,
                point.y >= frame.bottom() - band,
                point.x >= frame.right() - band,
                point.x < frame.x + band,
            );
            if let Some(handle) = handle {
                return Some(WindowRegion::Resize(handle));
            }
        }

        if point.y >= frame.y + self.title_bar_height {
            return Some(WindowRegion::Content);
        }

        let buttons = [
            WindowRegion::CloseButton,
            WindowRegion::MaximizeButton,
            WindowRegion::MinimizeButton,
        ];
        for (slot, region) in buttons.into_iter().enumerate() {
            if self.button_rect(frame, slot).contains(point) {
                return Some(region);
            }
        }

        Some(WindowRegion::TitleBar)
    }

    /// Rectangle of the title bar button at `slot`, counted from the right
    fn button_rect(&self, frame: Rect, slot: usize) -> Rect {
        let right = frame.right()
            - self.button_margin
            - slot as f32 * (self.button_size + self.button_spacing);
        let top = frame.y + (self.title_bar_height - self.button_size) / 2.0;
        Rect::new(right - self.button_size, top, self.button_size, self.button_size)
    }
}
