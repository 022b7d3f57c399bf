//! One-ply tactics shared by every strategy.

use super::super::rules::winner;
use super::super::{Board, Player, Position};
use tracing::instrument;

/// First empty cell (row-major) that completes a line for `player`.
#[instrument]
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    board
        .empty_cells()
        .into_iter()
        .find(|pos| winner(&board.with_mark(*pos, player)) == Some(player))
}

/// First empty cell (row-major) where the opponent of `me` would win next turn.
#[instrument]
pub fn blocking_move(board: &Board, me: Player) -> Option<Position> {
    winning_move(board, me.opponent())
}
