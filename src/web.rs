//! Browser bindings
//!
//! A thin `wasm-bindgen` surface over [`Session`]: the page owns the canvas,
//! the animation frame loop and input, and calls in here once per event.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::persistence::LocalStorageStore;
use crate::platform::FrameClock;
use crate::session::Session;

fn to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Stack Tower core loaded");
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session<LocalStorageStore>,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebGame {
    /// `config_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WebGame, JsValue> {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json(config_json).map_err(to_js)?
        };
        let session = Session::new(config, LocalStorageStore).map_err(to_js)?;
        Ok(Self {
            session,
            clock: FrameClock::default(),
        })
    }

    pub fn start(&mut self, screen_width: f32) -> Result<(), JsValue> {
        self.session.start(screen_width).map(|_| ()).map_err(to_js)
    }

    /// Called from requestAnimationFrame with the frame's elapsed seconds
    pub fn frame(&mut self, frame_dt: f32, screen_width: f32) -> Result<(), JsValue> {
        let step = self.clock.step();
        for _ in 0..self.clock.advance(frame_dt) {
            self.session.tick(step, screen_width).map_err(to_js)?;
        }
        Ok(())
    }

    pub fn tick(&mut self, dt: f32, screen_width: f32) -> Result<(), JsValue> {
        self.session.tick(dt, screen_width).map(|_| ()).map_err(to_js)
    }

    pub fn place(&mut self) -> Result<(), JsValue> {
        self.session.place().map(|_| ()).map_err(to_js)
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.session.reset().map(|_| ()).map_err(to_js)
    }

    pub fn score(&self) -> f64 {
        self.session.snapshot().score as f64
    }

    pub fn best_score(&self) -> f64 {
        self.session.snapshot().best_score as f64
    }

    pub fn level(&self) -> u32 {
        self.session.game().state().current_level
    }

    pub fn is_game_over(&self) -> bool {
        self.session.game().state().is_game_over()
    }

    pub fn camera_offset(&self) -> f32 {
        self.session.game().state().camera_offset_y
    }

    /// Current draw list as JSON
    pub fn scene_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.scene()).map_err(to_js)
    }
}
