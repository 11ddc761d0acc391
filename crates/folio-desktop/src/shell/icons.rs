use serde::Serialize;
use tracing::debug;

use crate::app::AppId;

/// Icon as rendered on the desktop
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IconView {
    pub id: AppId,
    pub label: &'static str,
    pub selected: bool,
}

/// Selection and double-click detection for desktop icons
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DesktopIcons {
    selected: Option<AppId>,
    last_click: Option<(AppId, f64)>,
}

impl DesktopIcons {
    /// Register a click on an icon at `now_ms`
    ///
    /// Selects the icon. Returns true when this click completes a double
    /// click, i.e. the previous click hit the same icon no more than
    /// `threshold_ms` earlier. A completed double click resets detection so
    /// a third click starts over.
    pub fn click(&mut self, id: AppId, now_ms: f64, threshold_ms: f64) -> bool {
        self.selected = Some(id);
        match self.last_click {
            Some((last, at)) if last == id && now_ms - at <= threshold_ms && now_ms >= at => {
                self.last_click = None;
                debug!(icon = %id, "icon double clicked");
                true
            }
            _ => {
                self.last_click = Some((id, now_ms));
                false
            }
        }
    }

    /// Clear the selection (click on the desktop background)
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.last_click = None;
    }

    /// Currently selected icon
    pub fn selected(&self) -> Option<AppId> {
        self.selected
    }

    /// Icons for `apps` with selection state
    pub fn views(&self, apps: &[AppId]) -> Vec<IconView> {
        apps.iter()
            .map(|app| IconView {
                id: *app,
                label: app.label(),
                selected: self.selected == Some(*app),
            })
            .collect()
    }
}
