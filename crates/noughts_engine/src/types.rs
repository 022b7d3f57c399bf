//! Core domain types for the board.

use crate::error::BoardParseError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Both players in the order they are checked for wins.
    pub const BOTH: [Player; 2] = [Player::X, Player::O];
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if the cell holds the given player's mark.
    pub fn is(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' | '1' => Some(Cell::Occupied(Player::X)),
            'O' | 'o' | '2' => Some(Cell::Occupied(Player::O)),
            '.' | '-' | '_' | '0' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board only stores marks. It trusts its callers: legality is the
/// job of the rules module and the session that applies moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows of cells.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (row, line) in rows.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                cells[row * 3 + col] = *cell;
            }
        }
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_row_col(row, col).map(|pos| self.cell(pos))
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Places a player's mark at the given position.
    ///
    /// No validation happens here; callers go through the rules first.
    pub fn set(&mut self, pos: Position, player: Player) {
        self.cells[pos.to_index()] = Cell::Occupied(player);
    }

    /// Returns a copy of this board with one more mark on it.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, player);
        next
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// Returns true once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Empty positions in row-major order.
    ///
    /// The order is stable; strategies rely on it for their tie-breaks.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is(player)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.cells[row * 3 + col].symbol())?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `"XO./.X./..O"` style notation.
    ///
    /// Rows are separated by `/` or newlines. Digits work too:
    /// `1` is X, `2` is O and `0` is empty.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != 3 {
            return Err(BoardParseError::new(format!(
                "expected 3 rows, found {}",
                rows.len()
            )));
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != 3 {
                return Err(BoardParseError::new(format!(
                    "row {} has {} cells, expected 3",
                    row,
                    symbols.len()
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                cells[row][col] = Cell::from_symbol(symbol).ok_or_else(|| {
                    BoardParseError::new(format!("unknown cell symbol {:?}", symbol))
                })?;
            }
        }

        Ok(Board::from_rows(cells))
    }
}
