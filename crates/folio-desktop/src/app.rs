//! The fixed set of launchable apps
//!
//! Every icon, start menu entry and window on the desktop is one of these
//! variants. Adding an app means adding a variant here; the compiler then
//! points at every match that has to learn about it.

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};

/// Identifier of a launchable app
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    /// "About me" page
    About,
    /// Project showcase page
    Projects,
    /// Blog index page
    Blog,
    /// Embedded runner game
    Arcade,
    /// Resume document (opens outside the desktop)
    Resume,
}

/// What launching an app does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Launch {
    /// Open (or raise) a desktop window
    Window,
    /// Hand an external document to the host; no window is created
    Document {
        /// Location of the document
        href: &'static str,
    },
}

/// Render contract for a window's content area
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WindowContent {
    /// A routed content page rendered inside the window
    Page {
        /// Route of the page
        route: &'static str,
    },
    /// The embedded game canvas
    Game,
}

impl AppId {
    /// Get all apps in display order
    pub fn all() -> &'static [AppId] {
        &[
            AppId::About,
            AppId::Projects,
            AppId::Blog,
            AppId::Arcade,
            AppId::Resume,
        ]
    }

    /// Parse from string ID (e.g., "about", "projects")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "about" => Some(AppId::About),
            "projects" => Some(AppId::Projects),
            "blog" => Some(AppId::Blog),
            "arcade" => Some(AppId::Arcade),
            "resume" => Some(AppId::Resume),
            _ => None,
        }
    }

    /// Parse a string ID coming from the host
    pub fn parse(id: &str) -> DesktopResult<Self> {
        Self::from_id(id).ok_or_else(|| DesktopError::UnknownApp(id.to_string()))
    }

    /// Get the string ID for this app
    pub fn id(&self) -> &'static str {
        match self {
            AppId::About => "about",
            AppId::Projects => "projects",
            AppId::Blog => "blog",
            AppId::Arcade => "arcade",
            AppId::Resume => "resume",
        }
    }

    /// Label shown under desktop icons and in the start menu
    pub fn label(&self) -> &'static str {
        match self {
            AppId::About => "About Me",
            AppId::Projects => "Projects",
            AppId::Blog => "Blog",
            AppId::Arcade => "Runner",
            AppId::Resume => "Resume.pdf",
        }
    }

    /// What launching this app does
    pub fn launch(&self) -> Launch {
        match self {
            AppId::About | AppId::Projects | AppId::Blog | AppId::Arcade => Launch::Window,
            AppId::Resume => Launch::Document {
                href: "/resume.pdf",
            },
        }
    }

    /// Content rendered inside this app's window
    ///
    /// Returns `None` for apps that never get a window.
    pub fn content(&self) -> Option<WindowContent> {
        match self {
            AppId::About => Some(WindowContent::Page { route: "/about" }),
            AppId::Projects => Some(WindowContent::Page { route: "/projects" }),
            AppId::Blog => Some(WindowContent::Page { route: "/blog" }),
            AppId::Arcade => Some(WindowContent::Game),
            AppId::Resume => None,
        }
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
