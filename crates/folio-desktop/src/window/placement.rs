//! Initial window placement
//!
//! Pure, deterministic math: centre the window in the work area, then push
//! it down and right by one cascade step per index so windows opened in a
//! row stay visibly separate.

use crate::math::{Size, Vec2};
use crate::viewport::Viewport;

/// Placement parameters taken from the desktop configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Height of the taskbar band
    pub taskbar_height: f32,
    /// Offset per cascade index
    pub cascade_step: f32,
    /// Minimum distance from the viewport's top/left edge
    pub edge_margin: f32,
}

impl Placement {
    /// Top-left position for a window of `size` at `cascade_index`
    ///
    /// `x = max(margin, round((vw - w) / 2) + i * step)`, and the same for
    /// `y` using the viewport height minus the taskbar band.
    pub fn centered_position(&self, viewport: &Viewport, size: Size, cascade_index: u32) -> Vec2 {
        let area = viewport.work_area(self.taskbar_height);
        let offset = cascade_index as f32 * self.cascade_step;

        let x = ((area.width - size.width) / 2.0).round() + offset;
        let y = ((area.height - size.height) / 2.0).round() + offset;

        Vec2::new(x.max(self.edge_margin), y.max(self.edge_margin))
    }
}

#[cfg(test)]
const PLACEMENT: Placement = Placement {
    taskbar_height: 40.0,
    cascade_step: 30.0,
    edge_margin: 10.0,
};


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Placement never puts a window closer than the margin to the top/left edge
        #[test]
        fn placement_respects_margin(
            vw in 1.0f32..4000.0,
            vh in 1.0f32..3000.0,
            w in 320.0f32..2000.0,
            h in 220.0f32..2000.0,
            index in 0u32..20,
        ) {
            let viewport = Viewport::measured(vw, vh, Size::new(1280.0, 800.0));
            let pos = PLACEMENT.centered_position(&viewport, Size::new(w, h), index);
            prop_assert!(pos.x >= 10.0);
            prop_assert!(pos.y >= 10.0);
        }

        /// Each cascade step moves the window by at most one step per axis
        #[test]
        fn cascade_is_monotonic(index in 0u32..50) {
            let viewport = Viewport::measured(1920.0, 1080.0, Size::new(1280.0, 800.0));
            let size = Size::new(520.0, 420.0);
            let a = PLACEMENT.centered_position(&viewport, size, index);
            let b = PLACEMENT.centered_position(&viewport, size, index + 1);
            prop_assert!(b.x >= a.x && b.x - a.x <= 30.0 + 0.001);
            prop_assert!(b.y >= a.y && b.y - a.y <= 30.0 + 0.001);
        }
    }
}
