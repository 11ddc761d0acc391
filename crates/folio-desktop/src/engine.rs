//! Desktop engine coordinating all components

use tracing::debug;

use crate::app::{AppId, Launch};
use crate::autoopen::AutoOpenSequence;
use crate::config::DesktopConfig;
use crate::input::{GestureSession, InputResult, InputRouter, ResizeHandle};
use crate::math::{Rect, Vec2};
use crate::mobile::MobileAccordion;
use crate::shell::{Clock, DesktopIcons, StartMenu};
use crate::snapshot::DesktopSnapshot;
use crate::viewport::{LayoutMode, Viewport};
use crate::window::{
    OpenOutcome, Placement, TaskbarAction, WindowManager, WindowRecord, WindowRegion, FRAME_STYLE,
};

/// Desktop engine coordinating all desktop components
///
/// This is the single owner of desktop state, managing:
/// - Viewport and layout mode (desktop or mobile)
/// - Window manager (records, z-order, active window)
/// - Input router (the drag/resize gesture session)
/// - Auto-open sequence for the first load
/// - Shell state (start menu, icon selection, clock, mobile accordion)
///
/// Every public method is a total transition. Time is passed in by the
/// caller as milliseconds; the engine never reads a clock.
pub struct DesktopEngine {
    config: DesktopConfig,
    /// Current viewport
    pub viewport: Viewport,
    layout: LayoutMode,
    /// Window manager
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    auto_open: AutoOpenSequence,
    initialized: bool,
    start_menu: StartMenu,
    icons: DesktopIcons,
    mobile: MobileAccordion,
    clock: Clock,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(DesktopConfig::default())
    }

    /// Create an engine with a custom configuration
    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            viewport: Viewport::fallback(config.fallback_viewport),
            layout: LayoutMode::Desktop,
            windows: WindowManager::new(),
            input: InputRouter::new(),
            auto_open: AutoOpenSequence::new(config.auto_open.clone(), config.auto_open_delay_ms),
            initialized: false,
            start_menu: StartMenu::default(),
            icons: DesktopIcons::default(),
            mobile: MobileAccordion::default(),
            clock: Clock::default(),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Get the current layout mode
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Mount the desktop with the measured viewport
    ///
    /// The first call decides the auto-open sequence: it starts on the
    /// desktop layout and is skipped for good on mobile. Later calls only
    /// update the viewport, so mounting twice never replays the sequence.
    pub fn init(&mut self, width: f32, height: f32, now_ms: f64) {
        self.resize(width, height);
        if self.initialized {
            return;
        }
        self.initialized = true;

        if self.layout.is_mobile() {
            self.auto_open.skip();
        } else {
            self.auto_open.start(now_ms);
        }
        debug!(width, height, layout = ?self.layout, "desktop initialized");
    }

    /// Update the viewport, switching layout if the breakpoint is crossed
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::measured(width, height, self.config.fallback_viewport);
        let layout = LayoutMode::for_width(self.viewport.size.width, self.config.mobile_breakpoint);
        if layout == self.layout {
            return;
        }

        self.layout = layout;
        if layout.is_mobile() {
            self.input.end();
            self.start_menu.close();
            if self.initialized {
                self.auto_open.skip();
            }
        }
        debug!(layout = ?layout, "layout changed");
    }

    /// Advance timers
    ///
    /// Fires any auto-open steps that are due. Returns true while steps
    /// remain, so the host knows to keep ticking.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        for step in self.auto_open.take_due(now_ms) {
            if let Some(spec) = self.config.spec(step.app) {
                let placement = self.placement();
                self.windows.open(spec, &placement, &self.viewport, Some(step.cascade_index));
            }
        }
        self.auto_open.is_running()
    }

    /// Set the clock's UTC offset (local minus UTC, in minutes)
    pub fn set_utc_offset(&mut self, minutes: i32) {
        self.clock = Clock::new(minutes);
    }

    // =========================================================================
    // Window commands
    // =========================================================================

    /// Open an app: create, restore, or hand back a document to open
    pub fn open(&mut self, app: AppId) -> OpenOutcome {
        self.start_menu.close();

        if let Launch::Document { href } = app.launch() {
            debug!(app = %app, href, "document requested");
            return OpenOutcome::Document { href };
        }

        let Some(spec) = self.config.spec(app) else {
            debug!(app = %app, "open ignored: no window entry");
            return OpenOutcome::Ignored;
        };

        if self.layout.is_mobile() {
            self.mobile.expand(app);
            return OpenOutcome::Expanded;
        }

        let placement = self.placement();
        self.windows.open(spec, &placement, &self.viewport, None)
    }

    /// Open an app by its string id; unknown ids are ignored
    pub fn open_by_id(&mut self, id: &str) -> OpenOutcome {
        match AppId::from_id(id) {
            Some(app) => self.open(app),
            None => {
                debug!(id, "open ignored: unknown app");
                OpenOutcome::Ignored
            }
        }
    }

    /// Close a window, releasing any gesture on it
    pub fn close(&mut self, app: AppId) -> bool {
        self.start_menu.close();
        self.input.cancel_for(app);
        self.windows.close(app)
    }

    /// Minimize a window, releasing any gesture on it
    pub fn minimize(&mut self, app: AppId) -> bool {
        self.start_menu.close();
        self.input.cancel_for(app);
        self.windows.minimize(app)
    }

    /// Raise a window and make it active
    pub fn focus(&mut self, app: AppId) -> bool {
        self.start_menu.close();
        self.windows.focus(app)
    }

    /// Maximize or restore a window
    ///
    /// A gesture on the window ends first so it cannot keep editing the
    /// geometry that was just cached.
    pub fn toggle_maximize(&mut self, app: AppId) -> Option<bool> {
        self.start_menu.close();
        self.input.cancel_for(app);
        self.windows.toggle_maximize(app)
    }

    /// Taskbar button click
    pub fn taskbar_click(&mut self, app: AppId) -> Option<TaskbarAction> {
        self.start_menu.close();
        let action = self.windows.taskbar_click(app);
        if action == Some(TaskbarAction::Minimized) {
            self.input.cancel_for(app);
        }
        action
    }

    // =========================================================================
    // Shell
    // =========================================================================

    /// Open or close the start menu
    pub fn toggle_start_menu(&mut self) {
        self.start_menu.toggle();
    }

    /// Launch an entry from the start menu
    pub fn start_menu_select(&mut self, app: AppId) -> OpenOutcome {
        self.open(app)
    }

    /// Click on a desktop icon; the second click of a double click opens it
    pub fn icon_click(&mut self, app: AppId, now_ms: f64) -> Option<OpenOutcome> {
        if self.icons.click(app, now_ms, self.config.double_click_ms) {
            Some(self.open(app))
        } else {
            None
        }
    }

    /// Click on the empty desktop background
    pub fn desktop_click(&mut self) {
        self.icons.clear_selection();
        self.start_menu.close();
    }

    /// Tap on a mobile section header; ignored on the desktop layout
    pub fn mobile_toggle(&mut self, app: AppId) -> Option<AppId> {
        if self.layout.is_mobile() {
            self.mobile.toggle(app);
        }
        self.mobile.expanded()
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Begin dragging a window by its title bar
    ///
    /// Refused on mobile, for windows that are not visible or are maximized,
    /// and while a resize is in progress.
    pub fn begin_move(&mut self, app: AppId, x: f32, y: f32) -> bool {
        self.start_menu.close();
        if self.input.session().is_some_and(|s| s.is_resize()) {
            return false;
        }
        let Some(frame) = self.gesture_frame(app) else {
            return false;
        };
        self.windows.focus(app);
        self.input.begin(GestureSession::moving(app, frame, Vec2::new(x, y)));
        true
    }

    /// Begin resizing a window from a handle
    pub fn begin_resize(&mut self, app: AppId, handle: ResizeHandle, x: f32, y: f32) -> bool {
        self.start_menu.close();
        let Some(frame) = self.gesture_frame(app) else {
            return false;
        };
        self.windows.focus(app);
        self.input.begin(GestureSession::resizing(app, handle, frame, Vec2::new(x, y)));
        true
    }

    /// Frame of a window that may start a gesture
    fn gesture_frame(&self, app: AppId) -> Option<Rect> {
        if self.layout.is_mobile() {
            return None;
        }
        let window = self.windows.get(app)?;
        if window.minimized || window.maximized {
            debug!(window = %app, "gesture refused");
            return None;
        }
        Some(window.rect())
    }

    /// Release the active gesture without further updates
    pub fn cancel_gesture(&mut self) -> bool {
        self.input.end().is_some()
    }

    /// Check whether the drag-lock overlay should be shown
    pub fn is_drag_locked(&self) -> bool {
        self.input.is_dragging()
    }

    // =========================================================================
    // Pointer routing
    // =========================================================================

    /// Topmost visible window under a point and the region hit
    fn hit_test(&self, point: Vec2) -> Option<(AppId, WindowRegion)> {
        self.windows
            .windows_by_z()
            .into_iter()
            .rev()
            .filter(|w| !w.minimized)
            .find_map(|w| {
                let frame = self.frame_of(w);
                FRAME_STYLE
                    .region_at(frame, point, !w.maximized)
                    .map(|region| (w.id, region))
            })
    }

    fn frame_of(&self, window: &WindowRecord) -> Rect {
        window.frame(&self.viewport, self.config.taskbar_height)
    }

    /// Handle pointer down event
    ///
    /// Title bar buttons act immediately and never start a drag.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        if self.layout.is_mobile() {
            return InputResult::Unhandled;
        }
        let Some((app, region)) = self.hit_test(Vec2::new(x, y)) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => {
                self.close(app);
            }
            WindowRegion::MinimizeButton => {
                self.minimize(app);
            }
            WindowRegion::MaximizeButton => {
                self.toggle_maximize(app);
            }
            WindowRegion::TitleBar => {
                if !self.begin_move(app, x, y) {
                    self.windows.focus(app);
                }
            }
            WindowRegion::Content => {
                self.focus(app);
            }
            WindowRegion::Resize(handle) => {
                self.begin_resize(app, handle, x, y);
            }
        }
        InputResult::Handled
    }

    /// Handle double click; on a title bar it toggles maximize
    pub fn handle_double_click(&mut self, x: f32, y: f32) -> InputResult {
        if self.layout.is_mobile() {
            return InputResult::Unhandled;
        }
        match self.hit_test(Vec2::new(x, y)) {
            Some((app, WindowRegion::TitleBar)) => {
                self.toggle_maximize(app);
                InputResult::Handled
            }
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer move event
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let Some(session) = self.input.session().copied() else {
            return InputResult::Unhandled;
        };
        let Some(current) = self.windows.get(session.window).map(|w| w.rect()) else {
            // Window vanished without going through close(); drop the gesture
            self.input.end();
            return InputResult::Unhandled;
        };

        let min = self.config.min_size;
        if let Some((app, frame)) = self.input.update(Vec2::new(x, y), current, min) {
            self.windows.set_rect(app, frame, min);
        }
        InputResult::Handled
    }

    /// Handle pointer up event
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end() {
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Everything the presentation layer needs for one render
    pub fn snapshot(&self, now_ms: f64) -> DesktopSnapshot {
        DesktopSnapshot::capture(self, now_ms)
    }

    pub(crate) fn placement(&self) -> Placement {
        Placement {
            taskbar_height: self.config.taskbar_height,
            cascade_step: self.config.cascade_step,
            edge_margin: self.config.edge_margin,
        }
    }

    pub(crate) fn window_frame(&self, window: &WindowRecord) -> Rect {
        self.frame_of(window)
    }

    pub(crate) fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    pub(crate) fn icons(&self) -> &DesktopIcons {
        &self.icons
    }

    pub(crate) fn mobile(&self) -> &MobileAccordion {
        &self.mobile
    }

    pub(crate) fn clock(&self) -> &Clock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    fn engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new();
        engine.init(1200.0, 800.0, 0.0);
        // Run the auto-open sequence out of the way for single-window tests
        engine.auto_open.skip();
        engine
    }

    #[test]
    fn test_open_about_is_centered() {
        let mut engine = engine();
        assert_eq!(engine.open(AppId::About), OpenOutcome::Created);
        let about = engine.windows.get(AppId::About).unwrap();
        assert_eq!(about.position, Vec2::new(340.0, 170.0));
        assert_eq!(about.size, Size::new(520.0, 420.0));
    }

    #[test]
    fn test_open_document_creates_no_window() {
        let mut engine = engine();
        assert_eq!(
            engine.open(AppId::Resume),
            OpenOutcome::Document {
                href: "/resume.pdf"
            }
        );
        assert_eq!(engine.windows.count(), 0);
    }

    #[test]
    fn test_open_unknown_or_unconfigured_is_noop() {
        let mut config = DesktopConfig::default();
        config.windows.retain(|spec| spec.app != AppId::Arcade);
        let mut engine = DesktopEngine::with_config(config);
        engine.init(1200.0, 800.0, 0.0);
        engine.auto_open.skip();

        assert_eq!(engine.open_by_id("settings"), OpenOutcome::Ignored);
        assert_eq!(engine.open(AppId::Arcade), OpenOutcome::Ignored);
        assert_eq!(engine.windows.count(), 0);
        assert_eq!(engine.windows.active(), None);
    }

    #[test]
    fn test_title_bar_drag_moves_window() {
        let mut engine = engine();
        engine.open(AppId::About);

        // Title bar of the window at (340, 170)
        assert_eq!(engine.handle_pointer_down(400.0, 185.0), InputResult::Handled);
        assert!(engine.is_drag_locked());

        engine.handle_pointer_move(450.0, 235.0);
        engine.handle_pointer_move(500.0, 285.0);
        let about = engine.windows.get(AppId::About).unwrap();
        assert_eq!(about.position, Vec2::new(440.0, 270.0));

        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
        assert!(!engine.is_drag_locked());

        // Moves after release do nothing
        assert_eq!(engine.handle_pointer_move(900.0, 700.0), InputResult::Unhandled);
        assert_eq!(
            engine.windows.get(AppId::About).unwrap().position,
            Vec2::new(440.0, 270.0)
        );
    }

    #[test]
    fn test_title_bar_buttons_do_not_drag() {
        let mut engine = engine();
        engine.open(AppId::About);
        let frame = engine.windows.get(AppId::About).unwrap().rect();

        // Minimize button sits two slots left of the right edge
        let x = frame.right() - 8.0 - 2.0 * 26.0 - 10.0;
        let y = frame.y + 16.0;
        assert_eq!(engine.handle_pointer_down(x, y), InputResult::Handled);
        assert!(!engine.is_drag_locked());
        assert!(engine.windows.get(AppId::About).unwrap().minimized);
    }

    #[test]
    fn test_close_button_removes_window() {
        let mut engine = engine();
        engine.open(AppId::About);
        let frame = engine.windows.get(AppId::About).unwrap().rect();

        engine.handle_pointer_down(frame.right() - 18.0, frame.y + 16.0);
        assert!(!engine.windows.is_open(AppId::About));
        assert!(!engine.is_drag_locked());
    }

    #[test]
    fn test_double_click_title_bar_toggles_maximize() {
        let mut engine = engine();
        engine.open(AppId::About);

        engine.handle_double_click(400.0, 185.0);
        assert!(engine.windows.get(AppId::About).unwrap().maximized);

        // Maximized title bar is at the top of the viewport
        engine.handle_double_click(400.0, 10.0);
        let about = engine.windows.get(AppId::About).unwrap();
        assert!(!about.maximized);
        assert_eq!(about.position, Vec2::new(340.0, 170.0));
    }

    #[test]
    fn test_maximized_window_cannot_drag_or_resize() {
        let mut engine = engine();
        engine.open(AppId::About);
        engine.toggle_maximize(AppId::About);

        assert!(!engine.begin_move(AppId::About, 100.0, 10.0));
        assert!(!engine.begin_resize(AppId::About, ResizeHandle::SE, 100.0, 10.0));

        // Pointer down on the maximized title bar focuses but does not drag
        engine.handle_pointer_down(100.0, 10.0);
        assert!(!engine.is_drag_locked());
    }

    #[test]
    fn test_no_move_while_resizing() {
        let mut engine = engine();
        engine.open(AppId::About);
        assert!(engine.begin_resize(AppId::About, ResizeHandle::E, 860.0, 300.0));
        assert!(!engine.begin_move(AppId::About, 400.0, 185.0));
        assert!(engine.input.session().unwrap().is_resize());
    }

    #[test]
    fn test_west_resize_freezes_at_floor() {
        let mut engine = engine();
        engine.open(AppId::About);
        // Left edge at x = 340, width 520
        assert!(engine.begin_resize(AppId::About, ResizeHandle::W, 340.0, 300.0));

        engine.handle_pointer_move(500.0, 300.0);
        let about = engine.windows.get(AppId::About).unwrap();
        assert!((about.position.x - 500.0).abs() < 0.001);
        assert!((about.size.width - 360.0).abs() < 0.001);

        // Proposed width 120 is below the floor: nothing moves
        engine.handle_pointer_move(740.0, 300.0);
        let about = engine.windows.get(AppId::About).unwrap();
        assert!((about.position.x - 500.0).abs() < 0.001);
        assert!((about.size.width - 360.0).abs() < 0.001);

        engine.handle_pointer_up();
    }

    #[test]
    fn test_close_mid_gesture_releases_drag_lock() {
        let mut engine = engine();
        engine.open(AppId::About);
        engine.begin_move(AppId::About, 400.0, 185.0);
        assert!(engine.is_drag_locked());

        engine.close(AppId::About);
        assert!(!engine.is_drag_locked());
        assert_eq!(engine.handle_pointer_move(10.0, 10.0), InputResult::Unhandled);
    }

    #[test]
    fn test_minimize_mid_gesture_releases_drag_lock() {
        let mut engine = engine();
        engine.open(AppId::About);
        engine.begin_resize(AppId::About, ResizeHandle::SE, 860.0, 590.0);
        engine.taskbar_click(AppId::About);
        assert!(engine.windows.get(AppId::About).unwrap().minimized);
        assert!(!engine.is_drag_locked());
    }

    #[test]
    fn test_window_actions_close_start_menu() {
        let mut engine = engine();
        engine.toggle_start_menu();
        assert!(engine.start_menu().is_open());
        engine.start_menu_select(AppId::Blog);
        assert!(!engine.start_menu().is_open());
        assert!(engine.windows.is_open(AppId::Blog));

        engine.toggle_start_menu();
        engine.taskbar_click(AppId::Blog);
        assert!(!engine.start_menu().is_open());
    }

    #[test]
    fn test_gesture_start_closes_start_menu() {
        let mut engine = engine();
        engine.open(AppId::About);

        engine.toggle_start_menu();
        assert!(engine.begin_move(AppId::About, 400.0, 185.0));
        assert!(!engine.start_menu().is_open());
        engine.handle_pointer_up();

        engine.toggle_start_menu();
        assert!(engine.begin_resize(AppId::About, ResizeHandle::SE, 860.0, 590.0));
        assert!(!engine.start_menu().is_open());
        engine.handle_pointer_up();

        // A refused gesture still dismisses the menu
        engine.toggle_maximize(AppId::About);
        engine.toggle_start_menu();
        assert!(!engine.begin_move(AppId::About, 100.0, 10.0));
        assert!(!engine.start_menu().is_open());
    }

    #[test]
    fn test_icon_double_click_opens() {
        let mut engine = engine();
        assert_eq!(engine.icon_click(AppId::Projects, 1000.0), None);
        assert_eq!(engine.icons().selected(), Some(AppId::Projects));
        assert_eq!(
            engine.icon_click(AppId::Projects, 1200.0),
            Some(OpenOutcome::Created)
        );
        engine.desktop_click();
        assert_eq!(engine.icons().selected(), None);
    }

    #[test]
    fn test_mobile_layout_skips_windows() {
        let mut engine = DesktopEngine::new();
        engine.init(390.0, 844.0, 0.0);
        assert_eq!(engine.layout(), LayoutMode::Mobile);

        assert!(!engine.tick(10_000.0));
        assert_eq!(engine.windows.count(), 0);

        assert_eq!(engine.open(AppId::About), OpenOutcome::Expanded);
        assert_eq!(engine.windows.count(), 0);
        assert_eq!(engine.mobile_toggle(AppId::About), None);
        assert_eq!(engine.mobile_toggle(AppId::Blog), Some(AppId::Blog));
        assert_eq!(engine.handle_pointer_down(100.0, 100.0), InputResult::Unhandled);
    }

    #[test]
    fn test_switch_to_mobile_releases_gesture() {
        let mut engine = engine();
        engine.open(AppId::About);
        engine.begin_move(AppId::About, 400.0, 185.0);
        engine.resize(500.0, 800.0);
        assert_eq!(engine.layout(), LayoutMode::Mobile);
        assert!(!engine.is_drag_locked());
    }

    #[test]
    fn test_maximized_frame_follows_viewport() {
        let mut engine = engine();
        engine.open(AppId::About);
        engine.toggle_maximize(AppId::About);
        engine.resize(1600.0, 900.0);

        let about = engine.windows.get(AppId::About).unwrap();
        assert_eq!(engine.window_frame(about), Rect::new(0.0, 0.0, 1600.0, 860.0));
    }

    #[test]
    fn test_init_twice_does_not_replay_auto_open() {
        let mut engine = DesktopEngine::new();
        engine.init(1200.0, 800.0, 0.0);
        engine.tick(5_000.0);
        engine.close(AppId::About);

        engine.init(1200.0, 800.0, 6_000.0);
        assert!(!engine.tick(20_000.0));
        assert!(!engine.windows.is_open(AppId::About));
    }
}
