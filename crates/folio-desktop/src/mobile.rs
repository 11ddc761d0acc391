//! Mobile layout: a single-column accordion
//!
//! Below the breakpoint the desktop drops windows entirely. Each app is a
//! section with a tappable header and at most one section is expanded.

use tracing::debug;

use crate::app::AppId;

/// Which section of the mobile accordion is expanded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileAccordion {
    expanded: Option<AppId>,
}

impl MobileAccordion {
    /// Tap on a section header: expand it, or collapse it if already expanded
    pub fn toggle(&mut self, id: AppId) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
        debug!(section = %id, expanded = self.expanded.is_some(), "mobile section toggled");
    }

    /// Expand a section, collapsing any other
    pub fn expand(&mut self, id: AppId) {
        self.expanded = Some(id);
    }

    /// Currently expanded section
    pub fn expanded(&self) -> Option<AppId> {
        self.expanded
    }
}
