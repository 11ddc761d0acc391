//! Resize handles and resize geometry

use serde::Serialize;

use crate::error::{DesktopError, DesktopResult};
use crate::math::{Rect, Size, Vec2};

/// One of the eight resize handles around a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// Parse a handle from its compass string ("n", "se", ...)
    pub fn parse(direction: &str) -> DesktopResult<Self> {
        match direction {
            "n" => Ok(ResizeHandle::N),
            "s" => Ok(ResizeHandle::S),
            "e" => Ok(ResizeHandle::E),
            "w" => Ok(ResizeHandle::W),
            "ne" => Ok(ResizeHandle::NE),
            "nw" => Ok(ResizeHandle::NW),
            "se" => Ok(ResizeHandle::SE),
            "sw" => Ok(ResizeHandle::SW),
            other => Err(DesktopError::InvalidDirection(other.to_string())),
        }
    }

    /// Build a handle from the edges it touches
    ///
    /// Returns `None` when no edge is set or when opposite edges are both set.
    pub fn from_edges(north: bool, south: bool, east: bool, west: bool) -> Option<Self> {
        match (north, south, east, west) {
            (true, false, false, false) => Some(ResizeHandle::N),
            (false, true, false, false) => Some(ResizeHandle::S),
            (false, false, true, false) => Some(ResizeHandle::E),
            (false, false, false, true) => Some(ResizeHandle::W),
            (true, false, true, false) => Some(ResizeHandle::NE),
            (true, false, false, true) => Some(ResizeHandle::NW),
            (false, true, true, false) => Some(ResizeHandle::SE),
            (false, true, false, true) => Some(ResizeHandle::SW),
            _ => None,
        }
    }

    pub fn north(self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    pub fn south(self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }

    pub fn east(self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    pub fn west(self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }
}

/// Compute the frame for a resize gesture
///
/// `start` is the frame when the gesture began, `current` the frame after the
/// previous update and `delta` the pointer offset from the gesture's start.
///
/// East and south edges grow additively and clamp at the floor. West and
/// north edges keep the opposite edge fixed: width and x (or height and y)
/// change together, and once the proposed size would drop below the floor
/// both stay at their values from `current`.
pub fn resize_frame(
    handle: ResizeHandle,
    start: Rect,
    current: Rect,
    delta: Vec2,
    min: Size,
) -> Rect {
    let mut next = current;

    if handle.east() {
        next.width = (start.width + delta.x).max(min.width);
    }
    if handle.west() {
        let proposed = start.width - delta.x;
        if proposed >= min.width {
            next.width = proposed;
            next.x = start.x + delta.x;
        }
    }
    if handle.south() {
        next.height = (start.height + delta.y).max(min.height);
    }
    if handle.north() {
        let proposed = start.height - delta.y;
        if proposed >= min.height {
            next.height = proposed;
            next.y = start.y + delta.y;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(320.0, 220.0);
    const START: Rect = Rect::new(100.0, 100.0, 500.0, 400.0);

    #[test]
    fn test_parse_handles() {
        assert_eq!(ResizeHandle::parse("nw").unwrap(), ResizeHandle::NW);
        assert_eq!(ResizeHandle::parse("s").unwrap(), ResizeHandle::S);
        assert_eq!(
            ResizeHandle::parse("up"),
            Err(DesktopError::InvalidDirection("up".to_string()))
        );
    }

    #[test]
    fn test_from_edges() {
        assert_eq!(ResizeHandle::from_edges(true, false, false, true), Some(ResizeHandle::NW));
        assert_eq!(ResizeHandle::from_edges(false, true, true, false), Some(ResizeHandle::SE));
        assert_eq!(ResizeHandle::from_edges(false, false, false, false), None);
        assert_eq!(ResizeHandle::from_edges(true, true, false, false), None);
    }

    #[test]
    fn test_east_grows_and_clamps() {
        let grown = resize_frame(ResizeHandle::E, START, START, Vec2::new(50.0, 30.0), MIN);
        assert_eq!(grown, Rect::new(100.0, 100.0, 550.0, 400.0));

        let clamped = resize_frame(ResizeHandle::E, START, START, Vec2::new(-1000.0, 0.0), MIN);
        assert!((clamped.width - 320.0).abs() < 0.001);
        assert!((clamped.x - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_south_east_corner() {
        let next = resize_frame(ResizeHandle::SE, START, START, Vec2::new(20.0, -500.0), MIN);
        assert_eq!(next, Rect::new(100.0, 100.0, 520.0, 220.0));
    }

    #[test]
    fn test_west_keeps_right_edge_fixed() {
        let next = resize_frame(ResizeHandle::W, START, START, Vec2::new(80.0, 0.0), MIN);
        assert_eq!(next, Rect::new(180.0, 100.0, 420.0, 400.0));
        assert!((next.right() - START.right()).abs() < 0.001);
    }

    #[test]
    fn test_west_freezes_at_last_valid_frame() {
        let step1 = resize_frame(ResizeHandle::W, START, START, Vec2::new(150.0, 0.0), MIN);
        assert_eq!(step1, Rect::new(250.0, 100.0, 350.0, 400.0));

        // Proposed width 200 < 320: neither x nor width move
        let step2 = resize_frame(ResizeHandle::W, START, step1, Vec2::new(300.0, 0.0), MIN);
        assert_eq!(step2, step1);

        // Back inside the valid range the edge follows the pointer again
        let step3 = resize_frame(ResizeHandle::W, START, step2, Vec2::new(100.0, 0.0), MIN);
        assert_eq!(step3, Rect::new(200.0, 100.0, 400.0, 400.0));
    }

    #[test]
    fn test_north_west_freezes_axes_independently() {
        let next = resize_frame(ResizeHandle::NW, START, START, Vec2::new(50.0, 300.0), MIN);
        // Width is valid (450), height is not (100)
        assert_eq!(next, Rect::new(150.0, 100.0, 450.0, 400.0));
    }

    #[test]
    fn test_north_grows_upward() {
        let next = resize_frame(ResizeHandle::N, START, START, Vec2::new(0.0, -60.0), MIN);
        assert_eq!(next, Rect::new(100.0, 40.0, 500.0, 460.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_handle() -> impl Strategy<Value = ResizeHandle> {
        prop_oneof![
            Just(ResizeHandle::N),
            Just(ResizeHandle::S),
            Just(ResizeHandle::E),
            Just(ResizeHandle::W),
            Just(ResizeHandle::NE),
            Just(ResizeHandle::NW),
            Just(ResizeHandle::SE),
            Just(ResizeHandle::SW),
        ]
    }

    proptest! {
        /// A sequence of pointer moves never yields a frame below the floor
        #[test]
        fn resize_never_below_floor(
            handle in any_handle(),
            moves in prop::collection::vec((-2000.0f32..2000.0, -2000.0f32..2000.0), 1..20),
        ) {
            let min = Size::new(320.0, 220.0);
            let start = Rect::new(200.0, 150.0, 600.0, 400.0);
            let mut current = start;
            for (dx, dy) in moves {
                current = resize_frame(handle, start, current, Vec2::new(dx, dy), min);
                prop_assert!(current.width >= min.width);
                prop_assert!(current.height >= min.height);
            }
        }

        /// West/north resizes keep the opposite edge where it started
        #[test]
        fn anchored_edges_stay_fixed(
            moves in prop::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 1..20),
        ) {
            let min = Size::new(320.0, 220.0);
            let start = Rect::new(200.0, 150.0, 600.0, 400.0);
            let mut current = start;
            for (dx, dy) in moves {
                current = resize_frame(ResizeHandle::NW, start, current, Vec2::new(dx, dy), min);
                prop_assert!((current.right() - start.right()).abs() < 0.01);
                prop_assert!((current.bottom() - start.bottom()).abs() < 0.01);
            }
        }
    }
}
