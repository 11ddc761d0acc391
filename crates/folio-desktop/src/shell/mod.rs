//! Desktop shell surfaces: taskbar, start menu, clock and icons
//!
//! These are thin views over the window manager. Every click they handle
//! turns into one window manager transition in the engine.

mod clock;
mod icons;
mod start_menu;
mod taskbar;

pub use clock::Clock;
pub use icons::{DesktopIcons, IconView};
pub use start_menu::{StartMenu, StartMenuEntry};
pub use taskbar::{taskbar_items, TaskbarItem};
