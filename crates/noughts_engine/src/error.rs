//! Error types for the engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned when a command is rejected.
///
/// None of these are fatal. The controller leaves its state untouched
/// whenever it returns one.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// Target cell is occupied or the indices are off the board.
    #[display("Illegal move at ({}, {})", row, col)]
    IllegalMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already been won or tied.
    #[display("Game is already over")]
    MoveAfterGameOver,

    /// The command does not fit the controller's current phase.
    #[display("Invalid transition: {}", _0)]
    InvalidModeTransition(String),

    /// A postcondition failed after a move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

/// Board notation could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
