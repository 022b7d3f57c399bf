//! History consistency invariant: the board is exactly what the moves built.

use super::super::{Board, GameSession, Player};
use super::Invariant;

/// Invariant: replaying the move history onto an empty board reproduces
/// the current board.
///
/// Moves must alternate starting with X, and each must land on a cell
/// that was empty at the time. This also makes the board monotonic:
/// a mark, once placed, never changes.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut rebuilt = Board::new();
        let mut expected = Player::X;

        for mv in session.history() {
            if mv.player != expected || !rebuilt.is_empty(mv.position) {
                return false;
            }
            rebuilt.set(mv.position, mv.player);
            expected = expected.opponent();
        }

        rebuilt == *session.board()
    }

    fn description() -> &'static str {
        "Board matches its move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Move, Position};

    #[test]
    fn test_empty_session_holds() {
        let session = GameSession::new(GameMode::PlayerVsPlayer);
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_moves_hold() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            session.play(row, col).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&session));
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        session.play(1, 1).unwrap();
        session.board.set(Position::Center, Player::O);
        assert!(!HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_out_of_turn_history_violates() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        session.history.push(Move::new(Player::O, Position::Center));
        session.board.set(Position::Center, Player::O);
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
