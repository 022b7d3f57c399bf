//! Computer opponents.
//!
//! Both strategies share the same first two steps (take an immediate win,
//! otherwise block the opponent's immediate win) and differ in what they
//! do when neither applies.

pub mod easy;
pub mod hard;
pub mod tactics;

pub use easy::{EasyStrategy, cell_weight, weighted_pick};
pub use hard::{DEFAULT_SEARCH_DEPTH, HardStrategy, SearchReport};
pub use tactics::{blocking_move, winning_move};

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// Difficulty tier of a computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Greedy one-ply lookahead with a weighted random fallback.
    Easy,
    /// Minimax with alpha-beta pruning.
    Hard,
}

/// A policy that picks the computer's move.
///
/// Callers only ask when it is `me`'s turn and the game is still in
/// progress. `None` means there was no empty cell to choose.
pub trait Strategy {
    /// Chooses a move for `me` on `board`.
    fn select_move(&mut self, board: &Board, me: Player) -> Option<Position>;
}

/// Source of uniform random draws.
///
/// Every [`rand::Rng`] is a draw source, so a seeded
/// [`rand::rngs::StdRng`] gives reproducible choices.
pub trait DrawSource {
    /// Returns a value drawn uniformly from `0..upper`. `upper` is never zero.
    fn draw_below(&mut self, upper: u32) -> u32;
}

impl<R: rand::Rng + ?Sized> DrawSource for R {
    fn draw_below(&mut self, upper: u32) -> u32 {
        self.random_range(0..upper)
    }
}
