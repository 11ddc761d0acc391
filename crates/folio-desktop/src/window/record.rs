//! Window record: the manager's view of one open window

use crate::app::AppId;
use crate::config::WindowSpec;
use crate::math::{Rect, Size, Vec2};
use crate::viewport::Viewport;

/// One open application window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowRecord {
    /// App shown in the window; at most one record per app
    pub id: AppId,
    /// Title bar and taskbar text
    pub title: String,
    /// Hidden, only reachable from the taskbar
    pub minimized: bool,
    /// Filling the work area
    pub maximized: bool,
    /// Paint and focus order; higher is on top
    pub z_index: u32,
    /// Top-left corner while not maximized
    pub position: Vec2,
    /// Size while not maximized
    pub size: Size,
    /// Geometry captured right before maximizing
    pre_maximize: Option<Rect>,
}

impl WindowRecord {
    /// Create a record from its table entry
    pub fn new(spec: &WindowSpec, position: Vec2, z_index: u32) -> Self {
        Self {
            id: spec.app,
            title: spec.title.clone(),
            minimized: false,
            maximized: false,
            z_index,
            position,
            size: spec.size,
            pre_maximize: None,
        }
    }

    /// Stored (restored-state) geometry
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Geometry the window currently occupies on screen
    pub fn frame(&self, viewport: &Viewport, taskbar_height: f32) -> Rect {
        if self.maximized {
            viewport.maximized_frame(taskbar_height)
        } else {
            self.rect()
        }
    }

    /// Geometry that restoring from maximized will bring back
    pub fn pre_maximize(&self) -> Option<Rect> {
        self.pre_maximize
    }

    /// Flip the maximized flag, caching or restoring geometry
    ///
    /// Returns the new maximized state.
    pub(crate) fn toggle_maximize(&mut self) -> bool {
        if self.maximized {
            if let Some(rect) = self.pre_maximize.take() {
                self.position = rect.position();
                self.size = rect.size();
            }
            self.maximized = false;
        } else {
            self.pre_maximize = Some(self.rect());
            self.maximized = true;
        }
        self.maximized
    }

    /// Replace the stored geometry
    ///
    /// Ignored while maximized or when `rect` is below the `min` floor.
    /// Returns whether the geometry changed.
    pub(crate) fn set_rect(&mut self, rect: Rect, min: Size) -> bool {
        if self.maximized || !rect.size().fits_floor(min) {
            return false;
        }
        let changed = rect != self.rect();
        self.position = rect.position();
        self.size = rect.size();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(320.0, 220.0);

    fn record() -> WindowRecord {
        let spec = WindowSpec {
            app: AppId::About,
            title: "About Me".to_string(),
            size: Size::new(520.0, 420.0),
        };
        WindowRecord::new(&spec, Vec2::new(340.0, 170.0), 11)
    }

    #[test]
    fn test_new_record() {
        let r = record();
        assert_eq!(r.id, AppId::About);
        assert_eq!(r.rect(), Rect::new(340.0, 170.0, 520.0, 420.0));
        assert!(!r.minimized && !r.maximized);
        assert_eq!(r.pre_maximize(), None);
    }

    #[test]
    fn test_maximize_round_trip_restores_exactly() {
        let mut r = record();
        r.set_rect(Rect::new(12.5, 33.25, 611.0, 377.0), MIN);
        let before = r.rect();

        assert!(r.toggle_maximize());
        assert_eq!(r.pre_maximize(), Some(before));

        let viewport = Viewport::measured(1200.0, 800.0, Size::new(1280.0, 800.0));
        assert_eq!(r.frame(&viewport, 40.0), Rect::new(0.0, 0.0, 1200.0, 760.0));

        // Geometry edits are inert while maximized
        assert!(!r.set_rect(Rect::new(0.0, 0.0, 900.0, 700.0), MIN));

        assert!(!r.toggle_maximize());
        assert_eq!(r.rect(), before);
        assert_eq!(r.pre_maximize(), None);
    }

    #[test]
    fn test_set_rect_rejects_below_floor() {
        let mut r = record();
        assert!(!r.set_rect(Rect::new(0.0, 0.0, 100.0, 420.0), MIN));
        assert_eq!(r.rect(), Rect::new(340.0, 170.0, 520.0, 420.0));
        assert!(r.set_rect(Rect::new(0.0, 0.0, 320.0, 220.0), MIN));
    }
}
