//! The eight lines of the board.

use super::super::Position;
use serde::{Deserialize, Serialize};

/// Every winning line, in search order: rows, columns, main diagonal,
/// anti-diagonal. Each line runs from one endpoint to the other.
pub(crate) const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// The two end cells of a completed line.
///
/// Front ends draw the strike-through from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineEndpoints {
    /// First cell of the line.
    pub start: Position,
    /// Last cell of the line.
    pub end: Position,
}

impl LineEndpoints {
    pub(crate) fn of(line: &[Position; 3]) -> Self {
        Self {
            start: line[0],
            end: line[2],
        }
    }
}

impl std::fmt::Display for LineEndpoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
