//! Terminal tic-tac-toe.

use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod input;
mod view;

use config::ConsoleConfig;

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env()?;

    // Initialize tracing on stderr so it stays out of the board output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(opponent = ?config.opponent, seed = ?config.seed, "Starting tic-tac-toe");

    app::run(&config, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
