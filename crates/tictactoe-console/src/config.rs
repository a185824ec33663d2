//! Console settings read from the environment.

use anyhow::Context;
use tictactoe_core::Opponent;

/// Default tracing filter. Quiet enough that logs don't interleave with the grid.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Tracing filter directive (`RUST_LOG`)
    pub log_filter: String,
    /// Who places the computer's marks (`TICTACTOE_OPPONENT`)
    pub opponent: Opponent,
    /// Seed for the random opponent (`TICTACTOE_SEED`)
    pub seed: Option<u64>,
}

impl ConsoleConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        let opponent = match lookup("TICTACTOE_OPPONENT") {
            Some(value) => value.parse().context("Invalid TICTACTOE_OPPONENT")?,
            None => Opponent::default(),
        };

        let seed = lookup("TICTACTOE_SEED")
            .map(|value| value.trim().parse::<u64>())
            .transpose()
            .context("Invalid TICTACTOE_SEED")?;

        Ok(Self {
            log_filter,
            opponent,
            seed,
        })
    }
}
