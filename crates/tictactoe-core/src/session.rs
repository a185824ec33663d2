//! Boundary between the game engine and a rendering/input layer.
//!
//! A frontend implements [`GameView`] and feeds cell activations into a
//! [`Session`]. The session owns the single [`GameState`] for the game,
//! applies each activation and calls back into the view with what to draw.

use crate::actions::{GameAction, GameEvent};
use crate::board::{CellIndex, Mark};
use crate::bot::{Bot, Opponent};
use crate::game::{GameError, GameState, Outcome};
use tracing::{debug, info, warn};

/// Rendering side of the game.
///
/// Every callback receives the game state as it is after the change.
pub trait GameView {
    /// Draw `mark` in `cell`
    fn on_move_accepted(&mut self, game: &GameState, cell: CellIndex, mark: Mark);

    /// Tell the user the move was not taken; the state is unchanged
    fn on_invalid_move(&mut self, game: &GameState, cell: CellIndex, error: &GameError);

    /// Announce the result. Return `true` to start a new game.
    fn on_game_ended(&mut self, game: &GameState, outcome: Outcome) -> bool;

    /// Erase every drawn mark
    fn on_board_cleared(&mut self, game: &GameState);
}

/// Where a session stands after handling an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Moves are being accepted
    Playing,
    /// The game ended and the view declined to restart
    Finished(Outcome),
}

/// One game instance wired to one view
pub struct Session<V: GameView> {
    game: GameState,
    view: V,
    bot: Option<Bot>,
}

impl<V: GameView> Session<V> {
    /// Create a session where both marks come from cell activations
    pub fn new(view: V) -> Self {
        Self {
            game: GameState::new(),
            view,
            bot: None,
        }
    }

    /// Create a session where a bot answers each player move
    pub fn with_bot(view: V, bot: Bot) -> Self {
        Self {
            game: GameState::new(),
            view,
            bot: Some(bot),
        }
    }

    /// Create a session for the given opponent kind
    pub fn with_opponent(view: V, opponent: Opponent, seed: Option<u64>) -> Self {
        match opponent {
            Opponent::Manual => Self::new(view),
            Opponent::Random => {
                let bot = seed.map(Bot::with_seed).unwrap_or_default();
                Self::with_bot(view, bot)
            }
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Current status of the session
    pub fn status(&self) -> SessionStatus {
        match self.game.outcome() {
            Some(outcome) => SessionStatus::Finished(outcome),
            None => SessionStatus::Playing,
        }
    }

    /// Handle a click (or key press) on a grid cell
    pub fn on_cell_activated(&mut self, cell: CellIndex) -> SessionStatus {
        if self.activate(cell) {
            self.respond();
        }
        self.status()
    }

    /// Reset the game and clear the view
    pub fn restart(&mut self) {
        match self.game.apply_action(GameAction::Restart) {
            Ok(events) => self.dispatch(events),
            Err(e) => warn!("Restart failed: {}", e),
        }
    }

    /// Apply one activation; returns whether it was accepted
    fn activate(&mut self, cell: CellIndex) -> bool {
        match self.game.apply_action(GameAction::ActivateCell(cell)) {
            Ok(events) => {
                self.dispatch(events);
                true
            }
            Err(e) => {
                warn!(cell, "Invalid move: {}", e);
                self.view.on_invalid_move(&self.game, cell, &e);
                false
            }
        }
    }

    /// Let the bot place the computer mark, if there is a bot and it is its turn
    fn respond(&mut self) {
        if self.game.is_finished() || self.game.current_mark() != Mark::Computer {
            return;
        }
        let Some(bot) = self.bot.as_mut() else {
            return;
        };
        if let Some(cell) = bot.choose_move(&self.game) {
            debug!(cell, "Computer responds");
            self.activate(cell);
        }
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::MoveAccepted { cell, mark } => {
                    debug!(cell, mark = %mark, turn = self.game.turn(), "Move accepted");
                    self.view.on_move_accepted(&self.game, cell, mark);
                }
                GameEvent::GameEnded { outcome } => {
                    info!(?outcome, "Game ended");
                    if self.view.on_game_ended(&self.game, outcome) {
                        self.restart();
                    }
                }
                GameEvent::BoardCleared => {
                    debug!("Board cleared");
                    self.view.on_board_cleared(&self.game);
                }
            }
        }
    }
}
