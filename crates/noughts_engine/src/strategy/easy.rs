//! Easy opponent: greedy one-ply lookahead, then a weighted coin toss.

use super::tactics::{blocking_move, winning_move};
use super::{DrawSource, Strategy};
use super::super::{Board, Player, Position};
use tracing::{debug, instrument};

/// Selection weight of a cell: center 3, corners 2, edges 1.
pub fn cell_weight(pos: Position) -> u32 {
    if pos.is_center() {
        3
    } else if pos.is_corner() {
        2
    } else {
        1
    }
}

/// Picks the first cell whose running weight exceeds `draw`.
///
/// With `draw` uniform over `0..total_weight`, each cell is chosen with
/// probability proportional to its weight. Returns `None` when `draw` is
/// not below the total weight.
#[instrument]
pub fn weighted_pick(cells: &[Position], draw: u32) -> Option<Position> {
    let mut cumulative = 0;
    cells.iter().copied().find(|pos| {
        cumulative += cell_weight(*pos);
        cumulative > draw
    })
}

/// Greedy opponent that falls back to a weighted random cell.
///
/// The random source is injected so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct EasyStrategy<R> {
    rng: R,
}

impl<R: DrawSource> EasyStrategy<R> {
    /// Creates an easy strategy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn random_cell(&mut self, board: &Board) -> Option<Position> {
        let cells = board.empty_cells();
        let total: u32 = cells.iter().map(|pos| cell_weight(*pos)).sum();
        if total == 0 {
            return None;
        }
        let draw = self.rng.draw_below(total);
        debug!(draw, total, "Weighted draw");
        weighted_pick(&cells, draw)
    }
}

impl<R: DrawSource> Strategy for EasyStrategy<R> {
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
        self.random_cell(board)
    }
}
