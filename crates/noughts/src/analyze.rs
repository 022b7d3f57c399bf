//! One-shot board analysis for `noughts analyze`.

use noughts_engine::{
    Board, HardStrategy, Player, blocking_move, evaluate, outcome, winning_line, winning_move,
};
use std::fmt::Write;
use tracing::instrument;

/// Side to move on a board reached by legal play.
pub fn side_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Describes `board` from `player`'s point of view.
///
/// Lists the outcome, the winning line if any, the heuristic score and,
/// while the game is open, the move the hard opponent would choose and
/// why: an immediate win, a block, or a search result.
#[instrument(skip(board))]
pub fn report(board: &Board, player: Player, depth: u8) -> String {
    let mut out = String::new();
    let result = outcome(board);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", board);
    let _ = writeln!(out);
    let _ = writeln!(out, "Outcome: {}", result);
    if let Some(line) = result.winner().and_then(|p| winning_line(board, p)) {
        let _ = writeln!(out, "Winning line: {}", line);
    }
    let _ = writeln!(out, "Evaluation for {}: {}", player, evaluate(board, player));

    if result.is_terminal() {
        return out;
    }

    if let Some(pos) = winning_move(board, player) {
        let _ = writeln!(out, "Best move for {}: {} (wins now)", player, pos);
    } else if let Some(pos) = blocking_move(board, player) {
        let _ = writeln!(
            out,
            "Best move for {}: {} (blocks {})",
            player,
            pos,
            player.opponent()
        );
    } else if let Some(search) = HardStrategy::new(depth).search(board, player) {
        let _ = writeln!(
            out,
            "Best move for {}: {} (search scores {} after {} nodes)",
            player,
            search.best(),
            search.score(),
            search.nodes()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::DEFAULT_SEARCH_DEPTH;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_side_to_move() {
        assert_eq!(side_to_move(&Board::new()), Player::X);
        assert_eq!(side_to_move(&board("100/000/000")), Player::O);
        assert_eq!(side_to_move(&board("120/000/000")), Player::X);
    }

    #[test]
    fn test_report_finished_board() {
        let text = report(&board("111/022/000"), Player::O, DEFAULT_SEARCH_DEPTH);
        assert!(text.contains("Outcome: Player X wins"));
        assert!(text.contains("Winning line: Top-left (0, 0) to Top-right (0, 2)"));
        assert!(text.contains("Evaluation for O: -100"));
        assert!(!text.contains("Best move"));
    }

    #[test]
    fn test_report_suggests_block() {
        let text = report(&board("110/020/000"), Player::O, DEFAULT_SEARCH_DEPTH);
        assert!(text.contains("Outcome: In progress"));
        assert!(
            text.contains("Best move for O: Top-right (0, 2) (blocks X)"),
            "{}",
            text
        );
        assert_eq!(text.matches("Best move").count(), 1);
        assert!(!text.contains("search scores"));
    }

    #[test]
    fn test_report_takes_win_over_block() {
        // O can win on the top row while X threatens the middle row.
        let text = report(&board("220/110/100"), Player::O, DEFAULT_SEARCH_DEPTH);
        assert!(
            text.contains("Best move for O: Top-right (0, 2) (wins now)"),
            "{}",
            text
        );
        assert_eq!(text.matches("Best move").count(), 1);
    }

    #[test]
    fn test_report_falls_back_to_search() {
        let text = report(&board("100/000/000"), Player::O, DEFAULT_SEARCH_DEPTH);
        assert!(text.contains("Best move for O: Center (1, 1) (search scores"), "{}", text);
        assert_eq!(text.matches("Best move").count(), 1);
    }
}
