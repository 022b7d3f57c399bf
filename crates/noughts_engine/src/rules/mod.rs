//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the session, the strategies and the
//! contracts can all share them.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::LineEndpoints;
pub use win::{winner, winning_line};

use super::{Board, Outcome, Position};
use tracing::instrument;

/// A move is legal if the indices are on the board and the cell is empty.
#[instrument]
pub fn is_legal_move(board: &Board, row: usize, col: usize) -> bool {
    Position::from_row_col(row, col).is_some_and(|pos| board.is_empty(pos))
}

/// Derives the outcome of a board.
///
/// A winner takes precedence over a full board.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Win(player)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_legal_move() {
        let board: Board = "1../.2./...".parse().unwrap();
        assert!(is_legal_move(&board, 0, 1));
        assert!(!is_legal_move(&board, 0, 0));
        assert!(!is_legal_move(&board, 1, 1));
        assert!(!is_legal_move(&board, 3, 0));
        assert!(!is_legal_move(&board, 0, 7));
    }

    #[test]
    fn test_outcome_variants() {
        let won: Board = "111/022/000".parse().unwrap();
        let tied: Board = "121/122/211".parse().unwrap();
        let open: Board = "120/000/000".parse().unwrap();

        assert_eq!(outcome(&won), Outcome::Win(Player::X));
        assert_eq!(outcome(&tied), Outcome::Tie);
        assert_eq!(outcome(&open), Outcome::InProgress);
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        let board: Board = "121/212/211".parse().unwrap();
        assert_eq!(outcome(&board), Outcome::Win(Player::X));
    }
}
