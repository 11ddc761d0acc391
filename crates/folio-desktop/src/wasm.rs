//! WASM bindings for the desktop engine
//!
//! The host page owns the DOM. It forwards pointer events, timer ticks and
//! viewport changes here, and renders from the JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::{AppId, Clock, DesktopConfig, DesktopEngine, OpenOutcome, ResizeHandle, TaskbarAction};

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

fn now() -> f64 {
    js_sys::Date::now()
}

fn parse_app(id: &str) -> Option<AppId> {
    match AppId::parse(id) {
        Ok(app) => Some(app),
        Err(e) => {
            log(&format!("[desktop] {}", e));
            None
        }
    }
}

/// Desktop controller exported to JavaScript
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller, optionally from a JSON configuration
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<DesktopController, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => DesktopConfig::default(),
        };
        let mut engine = DesktopEngine::with_config(config);
        let clock = Clock::from_timezone_offset(js_sys::Date::new_0().get_timezone_offset());
        engine.set_utc_offset(clock.utc_offset_minutes);

        Ok(Self { engine })
    }

    /// Mount with the measured viewport; starts auto-open on first call
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height, now());
        log(&format!(
            "[desktop] initialized {}x{} ({:?})",
            width,
            height,
            self.engine.layout()
        ));
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Advance timers; returns true while more ticks are needed
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.engine.tick(now())
    }

    /// Override the clock's UTC offset (local minus UTC, in minutes)
    #[wasm_bindgen]
    pub fn set_utc_offset(&mut self, minutes: i32) {
        self.engine.set_utc_offset(minutes);
    }

    /// Open an app by id
    ///
    /// Returns the document URL when the app is a document, so the host can
    /// open it in a new tab.
    #[wasm_bindgen]
    pub fn open(&mut self, id: &str) -> Option<String> {
        match self.engine.open_by_id(id) {
            OpenOutcome::Document { href } => Some(href.to_string()),
            _ => None,
        }
    }

    #[wasm_bindgen]
    pub fn close(&mut self, id: &str) {
        if let Some(app) = parse_app(id) {
            self.engine.close(app);
        }
    }

    #[wasm_bindgen]
    pub fn minimize(&mut self, id: &str) {
        if let Some(app) = parse_app(id) {
            self.engine.minimize(app);
        }
    }

    #[wasm_bindgen]
    pub fn focus(&mut self, id: &str) {
        if let Some(app) = parse_app(id) {
            self.engine.focus(app);
        }
    }

    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: &str) {
        if let Some(app) = parse_app(id) {
            self.engine.toggle_maximize(app);
        }
    }

    /// Taskbar button click; returns "restored", "minimized" or "focused"
    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, id: &str) -> Option<String> {
        let action = self.engine.taskbar_click(parse_app(id)?)?;
        let name = match action {
            TaskbarAction::Restored => "restored",
            TaskbarAction::Minimized => "minimized",
            TaskbarAction::Focused => "focused",
        };
        Some(name.to_string())
    }

    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        self.engine.toggle_start_menu();
    }

    /// Start menu entry; returns a document URL like `open`
    #[wasm_bindgen]
    pub fn start_menu_select(&mut self, id: &str) -> Option<String> {
        self.open(id)
    }

    /// Desktop icon click; returns a document URL when a double click opens one
    #[wasm_bindgen]
    pub fn icon_click(&mut self, id: &str) -> Option<String> {
        match self.engine.icon_click(parse_app(id)?, now())? {
            OpenOutcome::Document { href } => Some(href.to_string()),
            _ => None,
        }
    }

    #[wasm_bindgen]
    pub fn desktop_click(&mut self) {
        self.engine.desktop_click();
    }

    #[wasm_bindgen]
    pub fn mobile_toggle(&mut self, id: &str) {
        if let Some(app) = parse_app(id) {
            self.engine.mobile_toggle(app);
        }
    }

    /// Start a title-bar drag from a DOM handler
    #[wasm_bindgen]
    pub fn begin_move(&mut self, id: &str, x: f32, y: f32) -> bool {
        parse_app(id).is_some_and(|app| self.engine.begin_move(app, x, y))
    }

    /// Start a resize; `direction` is a compass handle ("n", "se", ...)
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, id: &str, direction: &str, x: f32, y: f32) -> bool {
        let Some(app) = parse_app(id) else {
            return false;
        };
        match ResizeHandle::parse(direction) {
            Ok(handle) => self.engine.begin_resize(app, handle, x, y),
            Err(e) => {
                log(&format!("[desktop] {}", e));
                false
            }
        }
    }

    /// Pointer down; returns true when a window handled it
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_down(x, y) == crate::InputResult::Handled
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_move(x, y) == crate::InputResult::Handled
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.handle_pointer_up() == crate::InputResult::Handled
    }

    #[wasm_bindgen]
    pub fn double_click(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_double_click(x, y) == crate::InputResult::Handled
    }

    /// Release any gesture (pointer capture lost, window blur)
    #[wasm_bindgen]
    pub fn cancel_gesture(&mut self) {
        self.engine.cancel_gesture();
    }

    #[wasm_bindgen]
    pub fn is_drag_locked(&self) -> bool {
        self.engine.is_drag_locked()
    }

    /// Render snapshot as JSON
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.engine
            .snapshot(now())
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
