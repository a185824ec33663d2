//! Game actions and the events that result from them.
//!
//! Actions come in from the input layer; events go out to whatever is
//! drawing the board.

use crate::board::{CellIndex, Mark};
use crate::game::Outcome;
use serde::{Deserialize, Serialize};

/// All possible inputs to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// A grid cell was clicked or otherwise chosen
    ActivateCell(CellIndex),
    /// Throw the current game away and start over
    Restart,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed and should be drawn
    MoveAccepted { cell: CellIndex, mark: Mark },

    /// The game reached a terminal state
    GameEnded { outcome: Outcome },

    /// The board was reset; all drawn marks should be cleared
    BoardCleared,
}
