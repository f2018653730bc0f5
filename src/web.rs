//! Browser bindings
//!
//! A thin `wasm-bindgen` facade: the page's script owns the canvas, the
//! menu and game-over screens, and the animation frame loop. It forwards
//! pointer moves and the two screen commands, and draws from the JSON
//! snapshot returned by `frame`.

use wasm_bindgen::prelude::*;

use glam::Vec2;

use crate::game::Game;
use crate::input::PointerWriter;
use crate::sim::GamePhase;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialised by an earlier instance on this page
        return;
    }
    log::info!("Token Eater loaded");
}

/// Game handle exposed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    pointer: PointerWriter,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game with default tuning, or from a JSON tuning string
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> Result<WebGame, JsValue> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Tuning::default(),
        };
        let seed = js_sys::Date::now() as u64;
        log::info!("Game created with seed: {}", seed);
        let (game, pointer) =
            Game::new(seed, tuning).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebGame { game, pointer })
    }

    /// "Start" / "Play again" button
    pub fn start(&mut self) {
        self.game.start();
    }

    /// "Main menu" button
    pub fn return_to_menu(&mut self) {
        self.game.return_to_menu();
    }

    /// Pointer moved, in canvas-local logical coordinates
    pub fn set_pointer(&self, x: f32, y: f32) {
        self.pointer.set(Vec2::new(x, y));
    }

    /// Pointer moved, in client coordinates plus the canvas bounding rect
    pub fn set_pointer_client(&self, x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) {
        self.pointer
            .set_from_client(Vec2::new(x, y), Vec2::new(left, top), Vec2::new(width, height));
    }

    /// Current phase: "menu", "playing" or "gameover"
    pub fn phase(&self) -> String {
        match self.game.phase() {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "gameover",
        }
        .to_string()
    }

    /// requestAnimationFrame callback: advance and return the frame snapshot
    /// as JSON, with this frame's events under `events`
    pub fn frame(&mut self, time_ms: f64) -> Result<String, JsValue> {
        let events = self.game.frame(time_ms);
        let payload = serde_json::json!({
            "view": self.game.view(),
            "events": events,
        });
        serde_json::to_string(&payload).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
