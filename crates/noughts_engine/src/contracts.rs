//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::error::GameError;
use super::invariants::{InvariantSet, SessionInvariants};
use super::{Cell, GameSession, Move, Position};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), GameError>;
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game is still in progress
/// - It is the mover's turn
/// - Target cell is empty
///
/// Postconditions:
/// - Exactly one cell changed, from empty to the mover's mark
/// - History grew by exactly this move
/// - All session invariants hold
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    #[instrument(skip(session))]
    fn pre(session: &GameSession, action: &Move) -> Result<(), GameError> {
        if session.outcome().is_terminal() {
            return Err(GameError::MoveAfterGameOver);
        }
        if action.player != *session.to_move() {
            return Err(GameError::InvalidModeTransition(format!(
                "it is {}'s turn, not {}'s",
                session.to_move(),
                action.player
            )));
        }
        if !session.board().is_empty(action.position) {
            return Err(GameError::IllegalMove {
                row: action.position.row(),
                col: action.position.col(),
            });
        }
        Ok(())
    }

    #[instrument(skip(before, after))]
    fn post(before: &GameSession, after: &GameSession, action: &Move) -> Result<(), GameError> {
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| before.board().cell(*pos) != after.board().cell(*pos))
            .collect();
        if changed != [action.position]
            || before.board().cell(action.position) != Cell::Empty
            || after.board().cell(action.position) != Cell::Occupied(action.player)
        {
            return Err(GameError::InvariantViolation(format!(
                "expected only {} to change, found {:?}",
                action.position, changed
            )));
        }

        if after.history().len() != before.history().len() + 1
            || after.history().last() != Some(action)
        {
            return Err(GameError::InvariantViolation(
                "history does not end with the applied move".to_string(),
            ));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Player};

    #[test]
    fn test_precondition_empty_cell() {
        let session = GameSession::new(GameMode::PlayerVsPlayer);
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&session, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        session.play(1, 1).unwrap();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&session, &action),
            Err(GameError::IllegalMove { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let session = GameSession::new(GameMode::PlayerVsPlayer);
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&session, &action),
            Err(GameError::InvalidModeTransition(_))
        ));
    }

    #[test]
    fn test_precondition_game_over() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.play(row, col).unwrap();
        }
        let action = Move::new(Player::X, Position::BottomRight);
        assert_eq!(
            MoveContract::pre(&session, &action),
            Err(GameError::MoveAfterGameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSession::new(GameMode::PlayerVsPlayer);
        let mut after = before.clone();
        let mv = after.play(1, 1).unwrap();
        assert!(MoveContract::post(&before, &after, &mv).is_ok());
    }

    #[test]
    fn test_postcondition_detects_extra_cell() {
        let before = GameSession::new(GameMode::PlayerVsPlayer);
        let mut after = before.clone();
        let mv = after.play(1, 1).unwrap();
        after.board.set(Position::TopLeft, Player::O);
        assert!(matches!(
            MoveContract::post(&before, &after, &mv),
            Err(GameError::InvariantViolation(_))
        ));
    }
}
