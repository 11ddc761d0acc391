//! Desktop window manager for the folio portfolio site
//!
//! This crate provides the state behind the site's desktop metaphor:
//! - Window management (open, close, focus, minimize, maximize, z-order)
//! - Input routing for title-bar drags and eight-way resizes
//! - Taskbar, start menu, desktop icons and clock
//! - A timed auto-open sequence on first load
//! - A single-column mobile layout below the breakpoint
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Window records, placement, hit testing and the manager
//! - [`input`]: Gesture sessions and resize geometry
//! - [`shell`]: Taskbar, start menu, icons and clock
//! - [`config`]: Window table and tunable constants
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{AppId, DesktopEngine, OpenOutcome, Vec2};
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(1200.0, 800.0, 0.0);
//!
//! // Let the auto-open sequence run to completion
//! while engine.tick(2_000.0) {}
//! assert_eq!(engine.windows.active(), Some(AppId::About));
//!
//! assert_eq!(engine.open(AppId::About), OpenOutcome::Restored);
//! assert_eq!(
//!     engine.windows.get(AppId::About).map(|w| w.position),
//!     Some(Vec2::new(400.0, 230.0))
//! );
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without a browser
//! 2. **Injected Time**: Timers take the current time as an argument
//! 3. **Total Operations**: Commands on unknown or closed windows are no-ops
//! 4. **Minimal Dependencies**: Core types have no browser dependencies

pub mod app;
pub mod config;
pub mod input;
pub mod math;
pub mod shell;
pub mod window;

mod autoopen;
mod engine;
mod error;
mod mobile;
mod snapshot;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use app::{AppId, Launch, WindowContent};
pub use autoopen::{AutoOpenSequence, AutoOpenState, AutoOpenStep};
pub use config::{DesktopConfig, WindowSpec};
pub use input::{GestureKind, GestureSession, InputResult, InputRouter, ResizeHandle};
pub use math::{Rect, Size, Vec2};
pub use mobile::MobileAccordion;
pub use shell::{Clock, IconView, StartMenuEntry, TaskbarItem};
pub use window::{
    FrameStyle, OpenOutcome, Placement, TaskbarAction, WindowManager, WindowRecord, WindowRegion,
    FRAME_STYLE,
};

pub use engine::DesktopEngine;
pub use error::{DesktopError, DesktopResult};
pub use snapshot::{DesktopSnapshot, WindowView};
pub use viewport::{LayoutMode, Viewport};
