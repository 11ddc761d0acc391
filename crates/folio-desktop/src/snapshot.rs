//! Render snapshot of the whole desktop
//!
//! The presentation layer draws from a snapshot and sends events back to the
//! engine; it never reads engine internals.

use serde::Serialize;

use crate::app::{AppId, WindowContent};
use crate::engine::DesktopEngine;
use crate::error::DesktopResult;
use crate::math::Rect;
use crate::shell::{taskbar_items, IconView, StartMenu, StartMenuEntry, TaskbarItem};
use crate::viewport::LayoutMode;

/// One window as it should be drawn
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowView {
    pub id: AppId,
    pub title: String,
    /// On-screen frame (the work area when maximized)
    pub frame: Rect,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    pub active: bool,
    /// False while any gesture is active, so embedded content cannot
    /// swallow pointer events mid-drag
    pub content_interactive: bool,
    /// Resize handles are shown
    pub resizable: bool,
    pub content: Option<WindowContent>,
}

/// Everything needed to render one frame of the desktop
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopSnapshot {
    pub layout: LayoutMode,
    /// False until the host reports a usable viewport size; placement uses
    /// the fallback viewport meanwhile
    pub viewport_measured: bool,
    /// Open windows, bottom of the stack first
    pub windows: Vec<WindowView>,
    pub active: Option<AppId>,
    /// Full-screen overlay that keeps pointer events on the desktop
    pub drag_lock: bool,
    pub taskbar: Vec<TaskbarItem>,
    pub start_menu_open: bool,
    pub start_menu: Vec<StartMenuEntry>,
    /// Taskbar clock text
    pub clock: String,
    pub icons: Vec<IconView>,
    /// Expanded section in the mobile layout
    pub mobile_expanded: Option<AppId>,
}

impl DesktopSnapshot {
    pub(crate) fn capture(engine: &DesktopEngine, now_ms: f64) -> Self {
        let drag_lock = engine.is_drag_locked();
        let active = engine.windows.active();

        let windows = engine
            .windows
            .windows_by_z()
            .into_iter()
            .map(|w| WindowView {
                id: w.id,
                title: w.title.clone(),
                frame: engine.window_frame(w),
                z_index: w.z_index,
                minimized: w.minimized,
                maximized: w.maximized,
                active: active == Some(w.id),
                content_interactive: !drag_lock,
                resizable: !w.maximized,
                content: w.id.content(),
            })
            .collect();

        Self {
            layout: engine.layout(),
            viewport_measured: engine.viewport.is_known(),
            windows,
            active,
            drag_lock,
            taskbar: taskbar_items(&engine.windows),
            start_menu_open: engine.start_menu().is_open(),
            start_menu: StartMenu::entries(engine.config()),
            clock: engine.clock().label(now_ms),
            icons: engine.icons().views(&engine.config().desktop_icons),
            mobile_expanded: engine.mobile().expanded(),
        }
    }

    /// Serialize to JSON for the host
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get a window view by id
    pub fn window(&self, id: AppId) -> Option<&WindowView> {
        self.windows.iter().find(|w| w.id == id)
    }
}
