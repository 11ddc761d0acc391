use serde::Serialize;
use tracing::debug;

use crate::app::{AppId, Launch};
use crate::config::DesktopConfig;

/// Start menu open/closed state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartMenu {
    open: bool,
}

/// One launchable start menu entry
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StartMenuEntry {
    pub id: AppId,
    pub label: &'static str,
    /// Opens an external document instead of a window
    pub document: bool,
}

impl StartMenu {
    /// Check if the menu is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the menu
    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "start menu toggled");
    }

    /// Close the menu; returns whether it was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Entries for every app that can actually be launched
    pub fn entries(config: &DesktopConfig) -> Vec<StartMenuEntry> {
        AppId::all()
            .iter()
            .filter_map(|app| match app.launch() {
                Launch::Window => config.spec(*app).map(|_| StartMenuEntry {
                    id: *app,
                    label: app.label(),
                    document: false,
                }),
                Launch::Document { .. } => Some(StartMenuEntry {
                    id: *app,
                    label: app.label(),
                    document: true,
                }),
            })
            .collect()
    }
}
