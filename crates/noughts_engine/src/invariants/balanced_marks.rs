//! Balanced marks invariant: X is never behind O, and never more than one ahead.

use super::super::{GameSession, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: `count(X) == count(O)` or `count(X) == count(O) + 1`.
///
/// X always moves first and players alternate, so any other count means
/// a cell was written outside a move.
pub struct BalancedMarksInvariant;

impl Invariant<GameSession> for BalancedMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "Mark counts out of balance");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Position};

    #[test]
    fn test_new_session_holds() {
        let session = GameSession::new(GameMode::PlayerVsPlayer);
        assert!(BalancedMarksInvariant::holds(&session));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2)] {
            session.play(row, col).unwrap();
            assert!(BalancedMarksInvariant::holds(&session));
        }
    }

    #[test]
    fn test_extra_o_violates() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        session.board.set(Position::Center, Player::O);
        assert!(!BalancedMarksInvariant::holds(&session));
    }

    #[test]
    fn test_two_extra_x_violates() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        session.board.set(Position::Center, Player::X);
        session.board.set(Position::TopLeft, Player::X);
        assert!(!BalancedMarksInvariant::holds(&session));
    }
}
