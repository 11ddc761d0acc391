//! Desktop configuration
//!
//! The window table, the auto-open sequence and the layout constants. The
//! defaults describe the shipped site; the host page may pass a JSON
//! override, which is validated before use.

use serde::{Deserialize, Serialize};

use crate::app::{AppId, Launch};
use crate::error::{DesktopError, DesktopResult};
use crate::math::Size;

/// Minimum window width
pub const MIN_WIDTH: f32 = 320.0;
/// Minimum window height
pub const MIN_HEIGHT: f32 = 220.0;
/// Height of the taskbar band at the bottom of the viewport
pub const TASKBAR_HEIGHT: f32 = 40.0;
/// Offset applied per cascade index on both axes
pub const CASCADE_STEP: f32 = 30.0;
/// Minimum distance between a freshly placed window and the viewport edge
pub const EDGE_MARGIN: f32 = 10.0;
/// Delay between auto-open steps in milliseconds
pub const AUTO_OPEN_DELAY_MS: f64 = 450.0;
/// Viewports narrower than this use the mobile layout
pub const MOBILE_BREAKPOINT: f32 = 768.0;
/// Maximum gap between two icon clicks that still counts as a double click
pub const DOUBLE_CLICK_MS: f64 = 400.0;
/// Viewport assumed before the real one is known
pub const FALLBACK_VIEWPORT: Size = Size::new(1280.0, 800.0);
/// z-index below every window; the first focus allocates `BASE_Z_INDEX + 1`
pub const BASE_Z_INDEX: u32 = 10;

/// Title and initial size of one app window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// App this entry configures
    pub app: AppId,
    /// Title bar and taskbar text
    pub title: String,
    /// Size on first open
    pub size: Size,
}

impl WindowSpec {
    fn new(app: AppId, title: &str, width: f32, height: f32) -> Self {
        Self {
            app,
            title: title.to_string(),
            size: Size::new(width, height),
        }
    }
}

/// Complete desktop configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Window table; apps without an entry cannot be opened
    pub windows: Vec<WindowSpec>,
    /// Apps opened one by one after the first desktop load
    pub auto_open: Vec<AppId>,
    /// Delay between auto-open steps (ms)
    pub auto_open_delay_ms: f64,
    /// Icons on the desktop, in display order
    pub desktop_icons: Vec<AppId>,
    /// Height of the taskbar band
    pub taskbar_height: f32,
    /// Cascade offset per index
    pub cascade_step: f32,
    /// Minimum placement margin
    pub edge_margin: f32,
    /// Size floor for every window
    pub min_size: Size,
    /// Width below which the mobile layout is used
    pub mobile_breakpoint: f32,
    /// Double click window for desktop icons (ms)
    pub double_click_ms: f64,
    /// Viewport assumed when none is known
    pub fallback_viewport: Size,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            windows: vec![
                WindowSpec::new(AppId::About, "About Me", 520.0, 420.0),
                WindowSpec::new(AppId::Projects, "Projects", 760.0, 520.0),
                WindowSpec::new(AppId::Blog, "Blog", 680.0, 500.0),
                WindowSpec::new(AppId::Arcade, "Runner", 800.0, 480.0),
            ],
            auto_open: vec![AppId::Projects, AppId::Blog, AppId::About],
            auto_open_delay_ms: AUTO_OPEN_DELAY_MS,
            desktop_icons: AppId::all().to_vec(),
            taskbar_height: TASKBAR_HEIGHT,
            cascade_step: CASCADE_STEP,
            edge_margin: EDGE_MARGIN,
            min_size: Size::new(MIN_WIDTH, MIN_HEIGHT),
            mobile_breakpoint: MOBILE_BREAKPOINT,
            double_click_ms: DOUBLE_CLICK_MS,
            fallback_viewport: FALLBACK_VIEWPORT,
        }
    }
}

impl DesktopConfig {
    /// Parse a JSON override and validate it
    ///
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Look up the window table entry for an app
    pub fn spec(&self, app: AppId) -> Option<&WindowSpec> {
        self.windows.iter().find(|spec| spec.app == app)
    }

    /// Check the tables for internal consistency
    pub fn validate(&self) -> DesktopResult<()> {
        for (i, spec) in self.windows.iter().enumerate() {
            if spec.app.launch() != Launch::Window {
                return Err(invalid("windows", format!("{} does not open a window", spec.app)));
            }
            if self.windows[..i].iter().any(|other| other.app == spec.app) {
                return Err(invalid("windows", format!("duplicate entry for {}", spec.app)));
            }
            if !spec.size.fits_floor(self.min_size) {
                return Err(invalid(
                    "windows",
                    format!("{} is smaller than the minimum size", spec.app),
                ));
            }
        }

        for app in &self.auto_open {
            if self.spec(*app).is_none() {
                return Err(invalid("auto_open", format!("{} has no window entry", app)));
            }
        }

        if !self.min_size.is_usable() {
            return Err(invalid("min_size", "must be positive".to_string()));
        }
        if !self.fallback_viewport.is_usable() {
            return Err(invalid("fallback_viewport", "must be positive".to_string()));
        }
        if !(self.auto_open_delay_ms.is_finite() && self.auto_open_delay_ms >= 0.0) {
            return Err(invalid("auto_open_delay_ms", "must be non-negative".to_string()));
        }
        if !(self.taskbar_height.is_finite() && self.taskbar_height >= 0.0) {
            return Err(invalid("taskbar_height", "must be non-negative".to_string()));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> DesktopError {
    DesktopError::InvalidConfig { field, reason }
}
