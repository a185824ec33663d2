//! WebAssembly bindings for the browser frontend.
//!
//! The page draws the canvas cells and calls `cellActivated` on click. The
//! returned event list tells it what to draw: a cross or circle for each
//! `MoveAccepted`, a restart prompt for `GameEnded`.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::GameAction;
#[cfg(feature = "wasm")]
use crate::bot::Bot;
#[cfg(feature = "wasm")]
use crate::game::GameState;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
    bot: Bot,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a new game with an empty board
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            state: GameState::new(),
            bot: Bot::new(),
        }
    }

    /// Handle a click on a cell (0-8). Returns events JSON, or the reason
    /// the move was refused.
    #[wasm_bindgen(js_name = cellActivated)]
    pub fn cell_activated(&mut self, cell: usize) -> Result<String, JsValue> {
        match self.state.apply_action(GameAction::ActivateCell(cell)) {
            Ok(events) => Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    /// Reset to an empty board, returns events JSON
    #[wasm_bindgen(js_name = restart)]
    pub fn restart(&mut self) -> String {
        match self.state.apply_action(GameAction::Restart) {
            Ok(events) => serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()),
            Err(_) => "[]".to_string(),
        }
    }

    /// Get the current game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the board cells as a JSON array
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(self.state.board().cells()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Symbol of the mark the next move places ("X" or "O")
    #[wasm_bindgen(js_name = getCurrentMark)]
    pub fn get_current_mark(&self) -> String {
        self.state.current_mark().symbol().to_string()
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Symbol of the winner, if the game is won
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<String> {
        self.state.winner().map(|mark| mark.symbol().to_string())
    }

    /// Cells of the completed line, if the game is won
    #[wasm_bindgen(js_name = getWinningLine)]
    pub fn get_winning_line(&self) -> Option<Vec<usize>> {
        self.state.winning_line().map(|line| line.to_vec())
    }

    /// Free cells as a JSON array
    #[wasm_bindgen(js_name = getValidMoves)]
    pub fn get_valid_moves(&self) -> String {
        serde_json::to_string(&self.state.valid_moves()).unwrap_or_else(|_| "[]".to_string())
    }

    /// A random free cell for the computer, or undefined when the game is over
    #[wasm_bindgen(js_name = suggestComputerMove)]
    pub fn suggest_computer_move(&mut self) -> Option<usize> {
        self.bot.choose_move(&self.state)
    }
}

#[cfg(feature = "wasm")]
impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
