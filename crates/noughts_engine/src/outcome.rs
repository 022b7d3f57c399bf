//! Game outcome derived from a board.

use super::Player;
use serde::{Deserialize, Serialize};

/// Where a game stands.
///
/// Always computed from the board by [`crate::outcome`]; nothing stores
/// an outcome that could drift out of sync with the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// Player completed a line.
    Win(Player),
    /// Board is full without a winner.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Tie => write!(f, "It's a tie"),
        }
    }
}
