//! Heuristic scoring of a board.

use super::rules::lines::LINES;
use super::rules::outcome;
use super::{Board, Cell, Outcome, Player, Position};
use tracing::instrument;

/// Score of a won position; a lost one scores the negation.
pub const WIN_SCORE: i32 = 100;

const CENTER_WEIGHT: i32 = 3;
const CORNER_WEIGHT: i32 = 2;
const OPEN_TWO_WEIGHT: i32 = 5;

/// Scores `board` from `perspective`'s point of view.
///
/// Terminal boards score `±WIN_SCORE` or zero for a tie. Anything else
/// sums center and corner ownership plus lines where one side has two
/// marks and the third cell is still open.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    match outcome(board) {
        Outcome::Win(player) if player == perspective => WIN_SCORE,
        Outcome::Win(_) => -WIN_SCORE,
        Outcome::Tie => 0,
        Outcome::InProgress => heuristic(board, perspective),
    }
}

fn ownership(cell: Cell, perspective: Player) -> i32 {
    match cell {
        Cell::Empty => 0,
        Cell::Occupied(player) if player == perspective => 1,
        Cell::Occupied(_) => -1,
    }
}

fn heuristic(board: &Board, perspective: Player) -> i32 {
    let center = CENTER_WEIGHT * ownership(board.cell(Position::Center), perspective);

    let corners: i32 = Position::CORNERS
        .iter()
        .map(|pos| CORNER_WEIGHT * ownership(board.cell(*pos), perspective))
        .sum();

    let open_twos: i32 = LINES
        .iter()
        .map(|line| {
            let cells = line.map(|pos| board.cell(pos));
            let empty = cells.iter().filter(|c| **c == Cell::Empty).count();
            let own = cells.iter().filter(|c| c.is(perspective)).count();
            let theirs = cells.iter().filter(|c| c.is(perspective.opponent())).count();
            match (empty, own, theirs) {
                (1, 2, 0) => OPEN_TWO_WEIGHT,
                (1, 0, 2) => -OPEN_TWO_WEIGHT,
                _ => 0,
            }
        })
        .sum();

    center + corners + open_twos
}
