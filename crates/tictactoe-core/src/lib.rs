//! Tic-tac-toe game engine
//!
//! This crate provides the turn and game-state logic for a browser
//! tic-tac-toe game, including:
//! - The 3x3 board, marks and the 8 winning lines
//! - Game state machine with alternating turns and win/draw detection
//! - A session boundary that drives a rendering layer through callbacks
//!
//! # Architecture
//!
//! The engine is platform-agnostic. It can be compiled to:
//! - Native Rust for terminal or test frontends
//! - WebAssembly for the canvas page in the browser
//!
//! # Modules
//!
//! - [`board`]: Cells, marks and line detection
//! - [`game`]: Game state machine
//! - [`actions`]: Inputs and the events they produce
//! - [`session`]: Rendering/input boundary
//! - [`bot`]: Optional reactive computer opponent

pub mod actions;
pub mod board;
pub mod bot;
pub mod game;
pub mod session;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{Board, Cell, CellIndex, Mark, CELL_COUNT, WINNING_LINES};
pub use bot::{Bot, Opponent, ParseOpponentError};
pub use game::{GameError, GamePhase, GameState, MoveResult, Outcome};
pub use session::{GameView, Session, SessionStatus};
