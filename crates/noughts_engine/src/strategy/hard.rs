//! Hard opponent: minimax search with alpha-beta pruning.

use super::tactics::{blocking_move, winning_move};
use super::Strategy;
use super::super::evaluator::evaluate;
use super::super::rules::outcome;
use super::super::{Board, Player, Position};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Plies searched below each candidate move unless configured otherwise.
pub const DEFAULT_SEARCH_DEPTH: u8 = 5;

/// Result of one root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SearchReport {
    /// Move with the strictly greatest score, first in row-major order on ties.
    best: Position,
    /// Minimax value of `best` from the searching player's side.
    score: i32,
    /// Nodes visited below the root.
    nodes: u64,
}

/// Minimax opponent.
///
/// Each root candidate is searched `depth` plies further. Leaves (won,
/// tied, or at the depth limit) are scored with [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardStrategy {
    depth: u8,
}

impl HardStrategy {
    /// Creates a hard strategy searching `depth` plies below each candidate.
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    /// Search depth below each candidate move.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Runs the full search for `me`, skipping the immediate win/block checks.
    ///
    /// Returns `None` when the board has no empty cell.
    #[instrument(skip(self), fields(depth = self.depth))]
    pub fn search(&self, board: &Board, me: Player) -> Option<SearchReport> {
        let mut search = Search {
            ai: me,
            limit: self.depth,
            nodes: 0,
        };

        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best: Option<(Position, i32)> = None;

        for pos in board.empty_cells() {
            let score = search.minimax(board.with_mark(pos, me), 0, false, alpha, beta);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
            }
            alpha = alpha.max(score);
        }

        best.map(|(best, score)| {
            debug!(position = %best, score, nodes = search.nodes, "Search finished");
            SearchReport {
                best,
                score,
                nodes: search.nodes,
            }
        })
    }
}

impl Default for HardStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Strategy for HardStrategy {
    #[instrument(skip(self))]
    fn select_move(&mut self, board: &Board, me: Player) -> Option<Position> {
        if let Some(pos) = winning_move(board, me) {
            debug!(position = %pos, "Taking immediate win");
            return Some(pos);
        }
        if let Some(pos) = blocking_move(board, me) {
            debug!(position = %pos, "Blocking opponent");
            return Some(pos);
        }
        self.search(board, me).map(|report| report.best)
    }
}

/// State of one root search.
struct Search {
    ai: Player,
    limit: u8,
    nodes: u64,
}

impl Search {
    /// Minimax value of `board` for `self.ai`.
    ///
    /// Every child is a fresh board value, so siblings never observe each
    /// other's trial marks, pruned or not.
    #[instrument(level = "trace", skip(self))]
    fn minimax(
        &mut self,
        board: Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if outcome(&board).is_terminal() || depth >= self.limit {
            return evaluate(&board, self.ai);
        }

        if maximizing {
            let mut best = i32::MIN;
            for pos in board.empty_cells() {
                let score =
                    self.minimax(board.with_mark(pos, self.ai), depth + 1, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for pos in board.empty_cells() {
                let score = self.minimax(
                    board.with_mark(pos, self.ai.opponent()),
                    depth + 1,
                    true,
                    alpha,
                    beta,
                );
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut strategy = HardStrategy::default();
        assert_eq!(
            strategy.select_move(&board("220/110/000"), Player::O),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_blocks_immediate_threat() {
        let mut strategy = HardStrategy::default();
        assert_eq!(
            strategy.select_move(&board("110/020/000"), Player::O),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_answers_corner_with_center() {
        // Against a corner opening, every reply but the center loses.
        let mut strategy = HardStrategy::default();
        assert_eq!(
            strategy.select_move(&board("100/000/000"), Player::O),
            Some(Position::Center)
        );
    }

    #[test]
    fn test_depth_zero_scores_candidates_by_heuristic() {
        // With no lookahead each candidate is just evaluated. Center is worth
        // +3 against X's corner (-2); the corners only break even.
        let strategy = HardStrategy::new(0);
        let report = strategy.search(&board("100/000/000"), Player::O).unwrap();
        assert_eq!(*report.best(), Position::Center);
        assert_eq!(*report.score(), 1);
        assert_eq!(*report.nodes(), 8);
    }

    #[test]
    fn test_search_finds_forced_win() {
        // X to move: (0,2) makes two threats at once, (0,1) and (1,2).
        let strategy = HardStrategy::default();
        let report = strategy.search(&board("100/020/201"), Player::X);
        assert!(report.is_some());
        let report = report.unwrap();
        assert_eq!(*report.score(), 100);
    }

    #[test]
    fn test_search_on_full_board() {
        let strategy = HardStrategy::default();
        assert!(strategy.search(&board("121/122/211"), Player::X).is_none());
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let before = board("100/020/000");
        let strategy = HardStrategy::default();
        let _ = strategy.search(&before, Player::X);
        assert_eq!(before, board("100/020/000"));
    }
}
