//! Noughts - terminal tic-tac-toe
//!
//! Plays against the noughts engine on stdin/stdout, or analyzes a single
//! board given on the command line.

#![warn(missing_docs)]

mod analyze;
mod cli;
mod config;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Side};
use config::PlayConfig;
use noughts_engine::{Board, DEFAULT_SEARCH_DEPTH, GameMode};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stdout carries the board; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            mode,
            config,
            seed,
            depth,
        } => run_play(mode, config, seed, depth),
        Command::Analyze { board, side, depth } => run_analyze(&board, side, depth),
    }
}

/// Run an interactive game
#[instrument]
fn run_play(
    mode: Option<GameMode>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    depth: Option<u8>,
) -> Result<()> {
    let config = PlayConfig::load(config.as_deref())?.with_overrides(mode, seed, depth);
    info!(mode = %config.mode(), "Starting play session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play::run(&config, stdin.lock(), stdout.lock())
}

/// Print an analysis of one board
#[instrument]
fn run_analyze(board: &str, side: Option<Side>, depth: Option<u8>) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Could not read board {:?}", board))?;
    let player = side.map_or_else(|| analyze::side_to_move(&board), Into::into);

    print!(
        "{}",
        analyze::report(&board, player, depth.unwrap_or(DEFAULT_SEARCH_DEPTH))
    );
    Ok(())
}
