//! Parsing of typed commands.
//!
//! Cells are numbered 1-9 on screen and converted to board indices here, so
//! the engine only ever sees indices that are on the board.

use thiserror::Error;
use tictactoe_core::{CellIndex, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Activate a cell (0-based board index)
    Cell(CellIndex),
    Restart,
    Quit,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter a cell number")]
    Empty,

    #[error("There is no cell {0}, use 1-9")]
    NoSuchCell(u64),

    #[error("Unknown command '{0}'")]
    Unknown(String),
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    if let Ok(number) = line.parse::<u64>() {
        return match number {
            1..=9 => Ok(Command::Cell(number as usize - 1)),
            _ => Err(InputError::NoSuchCell(number)),
        };
    }

    match line.to_ascii_lowercase().as_str() {
        "r" | "restart" => Ok(Command::Restart),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "h" | "help" | "?" => Ok(Command::Help),
        other => Err(InputError::Unknown(other.to_string())),
    }
}

/// Whether an answer to a yes/no prompt means yes
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn help_text() -> String {
    format!(
        "Enter 1-{} to place a mark (left to right, top to bottom), r to restart, q to quit.",
        CELL_COUNT
    )
}
