//! Terminal rendering of the game.

use crate::input::is_yes;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tictactoe_core::{CellIndex, GameError, GameState, GameView, Mark, Outcome};

/// Draws the board as text and asks questions on the same streams.
///
/// `GameView` callbacks can't fail, so the first I/O error is kept and handed
/// back by `take_error`.
pub struct TerminalView<R, W> {
    input: R,
    output: W,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            error: None,
        }
    }

    /// Read one trimmed line, or `None` at end of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn say(&mut self, text: impl Display) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.output, "{}", text) {
            self.error = Some(e);
        }
    }

    /// Ask whose turn it is to pick a cell
    pub fn prompt(&mut self, mark: Mark) {
        self.say(format!("{} to move:", mark));
    }

    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.take_error()?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> GameView for TerminalView<R, W> {
    fn on_move_accepted(&mut self, game: &GameState, cell: CellIndex, mark: Mark) {
        self.say(format!("{} takes cell {}", mark, cell + 1));
        self.say(game.board());
    }

    fn on_invalid_move(&mut self, _game: &GameState, _cell: CellIndex, error: &GameError) {
        match error {
            GameError::GameOver => self.say("The game is over. Enter r to restart."),
            _ => self.say("Invalid move!"),
        }
    }

    fn on_game_ended(&mut self, _game: &GameState, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Win(mark) => self.say(format!("{} won!", mark)),
            Outcome::Draw => self.say("It's a draw!"),
        }
        self.say("Play again? [y/n]");

        match self.read_line() {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                self.error.get_or_insert(e);
                false
            }
        }
    }

    fn on_board_cleared(&mut self, game: &GameState) {
        self.say("New game.");
        self.say(game.board());
    }
}
