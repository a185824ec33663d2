//! Reactive computer opponent.
//!
//! The computer has no strategy. By default its moves come from the same
//! input as the player's and turns just alternate (`Opponent::Manual`). With
//! `Opponent::Random` a `Bot` answers every player move with a random free
//! cell.

use crate::board::CellIndex;
use crate::game::GameState;
use rand::prelude::*;
use std::str::FromStr;
use thiserror::Error;

/// Who places the computer's marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opponent {
    /// The next cell activation places the computer mark
    #[default]
    Manual,
    /// A bot answers immediately with a random free cell
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown opponent '{0}', expected 'manual' or 'random'")]
pub struct ParseOpponentError(String);

impl FromStr for Opponent {
    type Err = ParseOpponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(Opponent::Manual),
            "random" => Ok(Opponent::Random),
            other => Err(ParseOpponentError(other.to_string())),
        }
    }
}

/// A bot that picks the computer's cell
pub struct Bot {
    rng: StdRng,
}

impl Bot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a free cell, or `None` when the game is over
    pub fn choose_move(&mut self, game: &GameState) -> Option<CellIndex> {
        game.valid_moves().choose(&mut self.rng).copied()
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new()
    }
}
