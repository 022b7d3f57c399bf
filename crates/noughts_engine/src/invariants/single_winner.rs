//! Single winner invariant: at most one player owns a full line.

use super::super::rules::winning_line;
use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: X and O never both have three in a row.
pub struct SingleWinnerInvariant;

impl Invariant<GameSession> for SingleWinnerInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        !(winning_line(board, Player::X).is_some() && winning_line(board, Player::O).is_some())
    }

    fn description() -> &'static str {
        "At most one player has a full line"
    }
}
