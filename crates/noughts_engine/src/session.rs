//! A single game from first move to outcome.

use super::contracts::{Contract, MoveContract};
use super::error::GameError;
use super::rules::{self, LineEndpoints};
use super::{Board, GameMode, Move, Outcome, Player, Position};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// One game in a given mode.
///
/// The session owns its board outright. The outcome is never stored;
/// it is derived from the board on demand.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSession {
    /// Current board.
    pub(crate) board: Board,
    /// Player to move; stays on the last mover once the game ends.
    to_move: Player,
    /// Mode chosen when the session started.
    mode: GameMode,
    /// Every move applied so far, in order.
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a new session with an empty board and X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            board: Board::new(),
            to_move: Player::X,
            mode,
            history: Vec::new(),
        }
    }

    /// Where the game stands.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Endpoints of the winning line once someone has won.
    pub fn winning_line(&self) -> Option<LineEndpoints> {
        self.outcome()
            .winner()
            .and_then(|player| rules::winning_line(&self.board, player))
    }

    /// Returns true when the computer should move next.
    pub fn is_ai_turn(&self) -> bool {
        !self.outcome().is_terminal() && self.mode.ai_player() == Some(self.to_move)
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On error the session is unchanged.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Move, GameError> {
        let pos = Position::from_row_col(row, col).ok_or(GameError::IllegalMove { row, col })?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn place(&mut self, pos: Position) -> Result<Move, GameError> {
        let mv = Move::new(self.to_move, pos);
        MoveContract::pre(self, &mv)?;

        let mut next = self.clone();
        next.board.set(pos, mv.player);
        next.history.push(mv);
        if !next.outcome().is_terminal() {
            next.to_move = mv.player.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next, &mv)?;

        debug!(%mv, outcome = %next.outcome(), "Move applied");
        *self = next;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = GameSession::new(GameMode::VsEasyAi);
        assert_eq!(*session.board(), Board::new());
        assert_eq!(*session.to_move(), Player::X);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_play_alternates() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        let mv = session.play(0, 0).unwrap();
        assert_eq!(mv, Move::new(Player::X, Position::TopLeft));
        assert_eq!(*session.to_move(), Player::O);
    }

    #[test]
    fn test_illegal_move_leaves_session_unchanged() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        session.play(0, 0).unwrap();
        let before = session.clone();

        assert_eq!(
            session.play(0, 0),
            Err(GameError::IllegalMove { row: 0, col: 0 })
        );
        assert_eq!(
            session.play(4, 1),
            Err(GameError::IllegalMove { row: 4, col: 1 })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_winner_keeps_turn_and_line() {
        let mut session = GameSession::new(GameMode::PlayerVsPlayer);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.play(row, col).unwrap();
        }
        assert_eq!(session.outcome(), Outcome::Win(Player::X));
        assert_eq!(*session.to_move(), Player::X);
        let line = session.winning_line().unwrap();
        assert_eq!((line.start, line.end), (Position::TopLeft, Position::TopRight));
        assert_eq!(session.play(2, 2), Err(GameError::MoveAfterGameOver));
    }

    #[test]
    fn test_ai_turn_only_in_ai_modes() {
        let mut pvp = GameSession::new(GameMode::PlayerVsPlayer);
        pvp.play(1, 1).unwrap();
        assert!(!pvp.is_ai_turn());

        let mut hard = GameSession::new(GameMode::VsHardAi);
        assert!(!hard.is_ai_turn());
        hard.play(1, 1).unwrap();
        assert!(hard.is_ai_turn());
    }
}
