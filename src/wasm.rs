use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::game::GameState;
use crate::types::BOARD_SIZE;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// JS handle owning one game.
#[wasm_bindgen]
pub struct ReversiGame {
    state: GameState,
}

#[wasm_bindgen]
impl ReversiGame {
    /// `config` may be `undefined`/`null` for defaults, or `{ annotate_pass: bool }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ReversiGame, JsValue> {
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            state: GameState::with_config(config),
        })
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Returns `false` and leaves the game untouched when the move is not legal.
    /// Coordinates must be whole numbers in 0..8.
    pub fn attempt_move(&mut self, row: f64, col: f64) -> bool {
        match (board_coord(row), board_coord(col)) {
            (Some(row), Some(col)) => self.state.attempt_move(row, col),
            _ => false,
        }
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.state.view())?)
    }

    /// Legal squares for the side to move, as `{ row, col }` objects.
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        let targets = if self.state.is_game_over() {
            Vec::new()
        } else {
            self.state.legal_targets(self.state.current_turn())
        };
        Ok(serde_wasm_bindgen::to_value(&targets)?)
    }

    pub fn status_message(&self) -> String {
        self.state.status_message()
    }

    /// Stone counts and winner (`null` on a tie).
    pub fn result(&self) -> Result<JsValue, JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        Ok(self.state.result().serialize(&serializer)?)
    }
}

/// `None` unless `value` is a whole number in 0..8.
fn board_coord(value: f64) -> Option<u8> {
    if value.fract() != 0.0 || !(0.0..BOARD_SIZE as f64).contains(&value) {
        return None;
    }
    u8::try_from(value as i64).ok()
}
