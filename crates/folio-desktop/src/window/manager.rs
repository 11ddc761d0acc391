//! Window manager: open/close/minimize/focus/maximize over the record set

use tracing::debug;

use super::placement::Placement;
use super::record::WindowRecord;
use crate::app::AppId;
use crate::config::{WindowSpec, BASE_Z_INDEX};
use crate::math::{Rect, Size};
use crate::viewport::Viewport;

/// Result of an open request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new record was inserted
    Created,
    /// An existing record was un-minimized and raised
    Restored,
    /// The app is a document; the host should open `href`
    Document {
        /// Location of the document
        href: &'static str,
    },
    /// Mobile layout: the app's section was expanded instead
    Expanded,
    /// Nothing happened (unknown or unconfigured app)
    Ignored,
}

/// What a taskbar click did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskbarAction {
    /// Minimized window was restored and focused
    Restored,
    /// Active window was minimized
    Minimized,
    /// Visible but inactive window was raised
    Focused,
}

/// Owns the open windows, the z-index counter and the active window
///
/// Every operation is total: ids without a record are ignored.
#[derive(Clone, Debug)]
pub struct WindowManager {
    /// Open windows in the order they were first opened
    windows: Vec<WindowRecord>,
    /// Last allocated z-index; never decremented or reused
    z_counter: u32,
    /// Focused window, always open and not minimized
    active: Option<AppId>,
    /// Number of records ever created; drives the cascade
    opened: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create an empty window manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            z_counter: BASE_Z_INDEX,
            active: None,
            opened: 0,
        }
    }

    /// Open a window, or restore and raise it if it is already open
    ///
    /// New records are placed with `cascade_index`, or with the running
    /// open count when `None`.
    pub fn open(
        &mut self,
        spec: &WindowSpec,
        placement: &Placement,
        viewport: &Viewport,
        cascade_index: Option<u32>,
    ) -> OpenOutcome {
        if self.restore(spec.app) {
            return OpenOutcome::Restored;
        }

        let index = cascade_index.unwrap_or(self.opened);
        let position = placement.centered_position(viewport, spec.size, index);
        let z_index = self.allocate_z();
        self.windows.push(WindowRecord::new(spec, position, z_index));
        self.opened += 1;
        self.active = Some(spec.app);

        debug!(
            window = %spec.app,
            cascade_index = index,
            z_index,
            x = position.x,
            y = position.y,
            "window opened"
        );
        OpenOutcome::Created
    }

    /// Un-minimize and raise an existing window
    ///
    /// Returns false when the window is not open.
    pub fn restore(&mut self, id: AppId) -> bool {
        if !self.focus(id) {
            return false;
        }
        debug!(window = %id, "window restored");
        true
    }

    /// Remove a window
    pub fn close(&mut self, id: AppId) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(window = %id, "close ignored: not open");
            return false;
        };
        self.windows.remove(index);
        if self.active == Some(id) {
            self.active = None;
        }
        debug!(window = %id, "window closed");
        true
    }

    /// Hide a window; its z-index is kept
    pub fn minimize(&mut self, id: AppId) -> bool {
        let Some(window) = self.get_mut(id) else {
            debug!(window = %id, "minimize ignored: not open");
            return false;
        };
        window.minimized = true;
        if self.active == Some(id) {
            self.active = None;
        }
        debug!(window = %id, "window minimized");
        true
    }

    /// Raise a window to the top and make it active
    ///
    /// A minimized window is shown again so the active window is always
    /// visible.
    pub fn focus(&mut self, id: AppId) -> bool {
        if self.index_of(id).is_none() {
            debug!(window = %id, "focus ignored: not open");
            return false;
        }
        let z_index = self.allocate_z();
        if let Some(window) = self.get_mut(id) {
            window.z_index = z_index;
            window.minimized = false;
        }
        self.active = Some(id);
        debug!(window = %id, z_index, "window focused");
        true
    }

    /// Flip the maximized state of a window
    ///
    /// Returns the new state, or `None` when the window is not open.
    pub fn toggle_maximize(&mut self, id: AppId) -> Option<bool> {
        let maximized = self.get_mut(id)?.toggle_maximize();
        debug!(window = %id, maximized, "window maximize toggled");
        Some(maximized)
    }

    /// Taskbar button semantics
    ///
    /// Minimized restores, active minimizes, anything else is raised.
    pub fn taskbar_click(&mut self, id: AppId) -> Option<TaskbarAction> {
        let minimized = self.get(id)?.minimized;
        let action = if minimized {
            self.restore(id);
            TaskbarAction::Restored
        } else if self.active == Some(id) {
            self.minimize(id);
            TaskbarAction::Minimized
        } else {
            self.focus(id);
            TaskbarAction::Focused
        };
        Some(action)
    }

    /// Update the stored geometry of a window
    ///
    /// Ignored while the window is maximized or when `rect` is below `min`.
    pub fn set_rect(&mut self, id: AppId, rect: Rect, min: Size) -> bool {
        self.get_mut(id)
            .map(|window| window.set_rect(rect, min))
            .unwrap_or(false)
    }

    /// Get a window by id
    pub fn get(&self, id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: AppId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    fn index_of(&self, id: AppId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn allocate_z(&mut self) -> u32 {
        self.z_counter += 1;
        self.z_counter
    }

    /// Check whether a window is open
    pub fn is_open(&self, id: AppId) -> bool {
        self.index_of(id).is_some()
    }

    /// Get the active window
    pub fn active(&self) -> Option<AppId> {
        self.active
    }

    /// Open windows in the order they were first opened (taskbar order)
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Open windows sorted by z-index, bottom first
    pub fn windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut sorted: Vec<&WindowRecord> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.z_index);
        sorted
    }

    /// Number of open windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}
