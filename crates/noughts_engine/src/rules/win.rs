//! Win detection logic.

use super::lines::{LINES, LineEndpoints};
use super::super::{Board, Player, Position};
use tracing::instrument;

fn line_held_by(board: &Board, line: &[Position; 3], player: Player) -> bool {
    line.iter().all(|pos| board.cell(*pos).is(player))
}

/// Checks if there is a winner on the board.
///
/// X is checked before O, and each player's lines are checked rows first,
/// then columns, then the main and anti diagonals. Legal play never lets
/// both players complete a line, but the order keeps the answer fixed for
/// any board.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    Player::BOTH
        .into_iter()
        .find(|player| LINES.iter().any(|line| line_held_by(board, line, *player)))
}

/// Finds the first full line held by `player`, in the same order as [`winner`].
#[instrument]
pub fn winning_line(board: &Board, player: Player) -> Option<LineEndpoints> {
    LINES
        .iter()
        .find(|line| line_held_by(board, line, player))
        .map(LineEndpoints::of)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("111/022/000")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("210/210/200")), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&board("120/210/001")), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("112/020/201")), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("110/200/000")), None);
    }

    #[test]
    fn test_x_reported_first_when_both_complete_lines() {
        // Unreachable in play, but the answer must still be deterministic.
        assert_eq!(winner(&board("222/000/111")), Some(Player::X));
    }

    #[test]
    fn test_winning_line_endpoints() {
        let row = winning_line(&board("000/111/220"), Player::X).unwrap();
        assert_eq!((row.start, row.end), (Position::MiddleLeft, Position::MiddleRight));

        let col = winning_line(&board("120/120/100"), Player::X).unwrap();
        assert_eq!((col.start, col.end), (Position::TopLeft, Position::BottomLeft));

        let main = winning_line(&board("120/210/001"), Player::X).unwrap();
        assert_eq!((main.start, main.end), (Position::TopLeft, Position::BottomRight));

        let anti = winning_line(&board("112/020/201"), Player::O).unwrap();
        assert_eq!((anti.start, anti.end), (Position::TopRight, Position::BottomLeft));
    }

    #[test]
    fn test_winning_line_prefers_rows() {
        // X holds both the top row and the left column.
        let line = winning_line(&board("111/122/122"), Player::X).unwrap();
        assert_eq!((line.start, line.end), (Position::TopLeft, Position::TopRight));
    }

    #[test]
    fn test_no_winning_line_for_loser() {
        assert_eq!(winning_line(&board("111/022/000"), Player::O), None);
    }
}
