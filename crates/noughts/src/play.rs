//! Line-oriented play loop.
//!
//! Reads one command per line and prints the board after every change.
//! Any `BufRead`/`Write` pair works, so tests drive it with in-memory
//! buffers.

use crate::config::PlayConfig;
use derive_more::{Display, Error};
use noughts_engine::{GameController, GameEvent, GameMode, Phase, Position};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <row> <col>        place a mark, rows and columns count from 0
  <cell>             place a mark by name or index (center, top-left, 0-8)
  reset              start over in the same mode
  menu               leave the game
  mode <pvp|easy|hard>  start a game from the menu
  help               show this text
  quit               exit";

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place at raw coordinates; range is checked by the engine.
    At {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
    },
    /// Place at a named cell.
    Cell(Position),
    /// Restart in the same mode.
    Reset,
    /// Back to the menu.
    Menu,
    /// Pick a mode from the menu.
    Mode(GameMode),
    /// Print commands.
    Help,
    /// Leave the loop.
    Quit,
}

/// Input line that matched no command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {:?}; type `help` for commands", input)]
pub struct InputError {
    /// The offending line, trimmed.
    pub input: String,
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let err = || InputError {
            input: line.to_string(),
        };
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["reset"] => Ok(Input::Reset),
            ["menu"] => Ok(Input::Menu),
            ["help"] | ["?"] => Ok(Input::Help),
            ["quit"] | ["exit"] | ["q"] => Ok(Input::Quit),
            ["mode", name] => GameMode::from_str(name).map(Input::Mode).map_err(|_| err()),
            [row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Ok(Input::At { row, col }),
                _ => Position::from_label_or_number(line)
                    .map(Input::Cell)
                    .ok_or_else(err),
            },
            [] => Err(err()),
            _ => Position::from_label_or_number(line)
                .map(Input::Cell)
                .ok_or_else(err),
        }
    }
}

/// Runs a session until `quit` or end of input.
#[instrument(skip(config, input, out), fields(mode = %config.mode()))]
pub fn run<R: BufRead, W: Write>(config: &PlayConfig, input: R, mut out: W) -> anyhow::Result<()> {
    let mut controller = GameController::new(*config.engine());
    let events = controller.set_mode(*config.mode())?;
    describe(&mut out, &events)?;
    status(&mut out, &controller)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Input>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Command received");

        let result = match command {
            Input::Quit => break,
            Input::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Input::At { row, col } => controller.apply_move(row, col),
            Input::Cell(pos) => controller.apply_move(pos.row(), pos.col()),
            Input::Reset => controller.reset(),
            Input::Menu => Ok(controller.return_to_menu()),
            Input::Mode(mode) => controller.set_mode(mode),
        };

        match result {
            Ok(events) => {
                describe(&mut out, &events)?;
                status(&mut out, &controller)?;
            }
            Err(e) => {
                warn!(error = %e, "Command rejected");
                writeln!(out, "Error: {}", e)?;
            }
        }
    }

    info!(moves = controller.history().len(), "Leaving play loop");
    Ok(())
}

/// Prints the events worth a line of their own.
fn describe<W: Write>(out: &mut W, events: &[GameEvent]) -> std::io::Result<()> {
    for event in events {
        match event {
            GameEvent::SessionStarted { mode } => writeln!(out, "New game: {}", mode.label())?,
            GameEvent::AiMoveSelected(mv) => writeln!(out, "Computer plays {}", mv.position)?,
            GameEvent::OutcomeDecided(outcome) => writeln!(out, "{}!", outcome)?,
            GameEvent::ReturnedToMenu => writeln!(out, "Back at the menu.")?,
            GameEvent::MovePlayed(_) | GameEvent::ActivePlayerChanged(_) => {}
        }
    }
    Ok(())
}

/// Prints the board and what happens next.
fn status<W: Write>(out: &mut W, controller: &GameController) -> std::io::Result<()> {
    if let Some(board) = controller.board() {
        writeln!(out)?;
        writeln!(out, "{}", board)?;
        writeln!(out)?;
    }
    match controller.phase() {
        Phase::Menu => writeln!(out, "Choose a mode: mode pvp | mode easy | mode hard"),
        Phase::InProgress => match controller.active_player() {
            Some(player) => writeln!(out, "{} to move", player),
            None => Ok(()),
        },
        Phase::Finished => {
            if let Some(line) = controller.winning_line() {
                writeln!(out, "Winning line: {}", line)?;
            }
            writeln!(out, "Game over. Type `reset` to play again or `menu` to leave.")
        }
    }
}
