//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts_engine::{GameMode, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against an easy or hard computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play or analyze tic-tac-toe from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Game mode: pvp, easy or hard (overrides the config file)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Path to a TOML config file. Defaults to noughts.toml if present.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the easy opponent's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Plies the hard opponent searches below each candidate move
        #[arg(long)]
        depth: Option<u8>,
    },

    /// Show outcome, evaluation and best move for a board
    Analyze {
        /// Board as three rows, e.g. "x.o/.x./..o" or "100/020/000"
        board: String,

        /// Side to analyze for. Defaults to the side to move.
        #[arg(long = "as", value_enum)]
        side: Option<Side>,

        /// Plies the search looks below each candidate move
        #[arg(long)]
        depth: Option<u8>,
    },
}

/// Side selector for `analyze --as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// The first mover
    X,
    /// The second mover
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from(["noughts", "play", "--mode", "easy", "--seed", "7"]).unwrap();
        match cli.command {
            Command::Play {
                mode, seed, depth, ..
            } => {
                assert_eq!(mode, Some(GameMode::VsEasyAi));
                assert_eq!(seed, Some(7));
                assert_eq!(depth, None);
            }
            other => panic!("expected play, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_analyze_side() {
        let cli = Cli::try_parse_from(["noughts", "analyze", "110/020/000", "--as", "o"]).unwrap();
        match cli.command {
            Command::Analyze { board, side, .. } => {
                assert_eq!(board, "110/020/000");
                assert_eq!(side, Some(Side::O));
            }
            other => panic!("expected analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["noughts", "play", "--mode", "impossible"]).is_err());
    }
}
