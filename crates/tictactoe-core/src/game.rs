//! Core game state machine.
//!
//! This module contains the `GameState` struct: board contents, the turn
//! counter, the filled-square count and win/draw detection.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, CellIndex, Mark, CELL_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are being accepted
    #[default]
    InProgress,

    /// A line was completed
    Won { winner: Mark },

    /// The board filled up without a completed line
    Drawn,
}

impl GamePhase {
    /// Whether no further moves are accepted
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

/// Result of a single accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The game goes on
    Continue,
    /// The move completed a line for this mark
    Win(Mark),
    /// The move filled the board without completing a line
    Draw,
}

impl MoveResult {
    /// The outcome if this move ended the game
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveResult::Continue => None,
            MoveResult::Win(mark) => Some(Outcome::Win(*mark)),
            MoveResult::Draw => Some(Outcome::Draw),
        }
    }
}

/// Errors that can occur when applying moves
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Cell {0} is already occupied")]
    CellOccupied(CellIndex),

    #[error("Cell {0} is not on the board")]
    CellOutOfRange(CellIndex),

    #[error("Game is over")]
    GameOver,
}

impl GameError {
    /// Whether the user should simply pick another cell
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::CellOccupied(_) | GameError::CellOutOfRange(_))
    }
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The game board
    board: Board,
    /// Accepted moves so far; parity picks the mark
    turn: u32,
    /// Non-empty cells
    filled: usize,
    /// Current game phase
    phase: GamePhase,
}

impl GameState {
    /// Create a new game with an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// The game board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves since the last reset
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    /// Current game phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The mark the next accepted move will place
    pub fn current_mark(&self) -> Mark {
        Mark::for_turn(self.turn)
    }

    /// Whether every cell is filled
    pub fn is_full(&self) -> bool {
        self.filled == CELL_COUNT
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// How the game ended, if it has
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::InProgress => None,
            GamePhase::Won { winner } => Some(Outcome::Win(winner)),
            GamePhase::Drawn => Some(Outcome::Draw),
        }
    }

    /// Get the winner if the game is won
    pub fn winner(&self) -> Option<Mark> {
        if let GamePhase::Won { winner } = self.phase {
            Some(winner)
        } else {
            None
        }
    }

    /// The completed line of a won game, for highlighting
    pub fn winning_line(&self) -> Option<[CellIndex; 3]> {
        self.winner()
            .and_then(|winner| self.board.completed_line(winner))
    }

    /// Whether any winning line is held entirely by `mark`
    pub fn check_winner(&self, mark: Mark) -> bool {
        self.board.has_line(mark)
    }

    /// Cells a move can currently be placed in
    pub fn valid_moves(&self) -> Vec<CellIndex> {
        if self.is_finished() {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    /// Place the current mark in `cell`.
    ///
    /// A rejected move leaves the state untouched. A move that completes a
    /// line wins even if it also fills the board.
    pub fn apply_move(&mut self, cell: CellIndex) -> Result<MoveResult, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if cell >= CELL_COUNT {
            return Err(GameError::CellOutOfRange(cell));
        }
        if !self.board.is_empty_at(cell) {
            return Err(GameError::CellOccupied(cell));
        }

        let mark = self.current_mark();
        self.board.set(cell, mark);
        self.turn += 1;
        self.filled += 1;

        let result = if self.check_winner(mark) {
            self.phase = GamePhase::Won { winner: mark };
            MoveResult::Win(mark)
        } else if self.is_full() {
            self.phase = GamePhase::Drawn;
            MoveResult::Draw
        } else {
            MoveResult::Continue
        };

        Ok(result)
    }

    /// Apply an action and return the events it produced
    pub fn apply_action(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        let mut events = Vec::new();

        match action {
            GameAction::ActivateCell(cell) => {
                let mark = self.current_mark();
                let result = self.apply_move(cell)?;

                events.push(GameEvent::MoveAccepted { cell, mark });
                if let Some(outcome) = result.outcome() {
                    events.push(GameEvent::GameEnded { outcome });
                }
            }

            GameAction::Restart => {
                self.reset();
                events.push(GameEvent::BoardCleared);
            }
        }

        Ok(events)
    }

    /// Clear the board and start over from the player's turn
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
