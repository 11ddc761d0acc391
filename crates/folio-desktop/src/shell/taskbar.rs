use serde::Serialize;

use crate::app::AppId;
use crate::window::WindowManager;

/// One taskbar button
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskbarItem {
    pub id: AppId,
    pub title: String,
    pub minimized: bool,
    pub active: bool,
}

/// Taskbar buttons for every open window, in the order they were opened
pub fn taskbar_items(windows: &WindowManager) -> Vec<TaskbarItem> {
    windows
        .windows()
        .iter()
        .map(|w| TaskbarItem {
            id: w.id,
            title: w.title.clone(),
            minimized: w.minimized,
            active: windows.active() == Some(w.id),
        })
        .collect()
}
