//! Browser bindings
//!
//! Exposes a session to JavaScript. The page owns the canvas, the event
//! listeners and the animation frame; it forwards raw events here and reads
//! back a JSON snapshot to draw.

use wasm_bindgen::prelude::*;

use crate::persistence::LocalStorageStore;
use crate::platform::{FrameDriver, InputState, Key, pointer_to_canvas};
use crate::settings::GameConfig;
use crate::sim::GameSession;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is not an error worth surfacing
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Brick Breaker starting...");
}

#[wasm_bindgen]
pub struct WasmSession {
    session: GameSession,
    driver: FrameDriver,
    input: InputState,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a session. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmSession, JsValue> {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let seed = js_sys::Date::now() as u64;
        let session = GameSession::new(config, seed, Box::new(LocalStorageStore::new()));
        let mut driver = FrameDriver::new();
        driver.start();
        Ok(WasmSession {
            session,
            driver,
            input: InputState::default(),
        })
    }

    /// Call once per animation frame
    pub fn frame(&mut self) {
        self.driver.on_frame(&mut self.session);
    }

    /// Call from the ~60 Hz paddle interval
    pub fn paddle_timer(&mut self) {
        self.driver.on_paddle_timer(&mut self.session, &self.input);
    }

    /// `KeyboardEvent.key`; returns true if the key is a game key
    pub fn key_down(&mut self, key: &str) -> bool {
        match Key::from_key_name(key) {
            Some(key) => {
                self.driver.on_key_down(&mut self.session, &mut self.input, key);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(key) = Key::from_key_name(key) {
            self.input.release(key);
        }
    }

    /// Pointer or touch x in client coordinates plus the canvas's bounding rect
    pub fn pointer_move(&mut self, client_x: f32, rect_left: f32, rect_width: f32) {
        let canvas_width = self.session.config().canvas_width;
        if let Some(x) = pointer_to_canvas(client_x, rect_left, rect_width, canvas_width) {
            self.session.pointer_moved(x);
        }
    }

    pub fn launch(&mut self) {
        self.session.launch();
    }

    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Stop reacting to frame and timer callbacks
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn resume(&mut self) {
        self.driver.start();
    }

    /// Full state snapshot for rendering
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
