//! The read-eval loop that drives a session from typed input.

use crate::config::ConsoleConfig;
use crate::input::{help_text, parse_command, Command};
use crate::view::TerminalView;
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Session, SessionStatus};
use tracing::{debug, info};

/// Play until the user quits, declines a rematch or input runs out.
///
/// Returns the output stream so callers can inspect what was written.
pub fn run<R, W>(config: &ConsoleConfig, input: R, output: W) -> anyhow::Result<W>
where
    R: BufRead,
    W: Write,
{
    let view = TerminalView::new(input, output);
    let mut session = Session::with_opponent(view, config.opponent, config.seed);

    session.view_mut().say("Tic Tac Toe");
    session.view_mut().say(help_text());
    session.view_mut().say(Board::new());

    loop {
        let mark = session.game().current_mark();
        session.view_mut().prompt(mark);
        session.view_mut().flush()?;

        let Some(line) = session.view_mut().read_line()? else {
            info!("End of input");
            break;
        };

        match parse_command(&line) {
            Ok(Command::Cell(cell)) => {
                if let SessionStatus::Finished(outcome) = session.on_cell_activated(cell) {
                    info!(?outcome, "Player declined a new game");
                    break;
                }
            }
            Ok(Command::Restart) => session.restart(),
            Ok(Command::Quit) => break,
            Ok(Command::Help) => session.view_mut().say(help_text()),
            Err(e) => {
                debug!(input = %line, "Unparsed input: {}", e);
                session.view_mut().say(e);
            }
        }

        session.view_mut().take_error()?;
    }

    session.view_mut().say("Bye!");
    let mut view = session.into_view();
    view.flush()?;
    Ok(view.into_output())
}
