//! Noughts engine - tic-tac-toe game state and computer opponents
//!
//! This library holds everything about a game of tic-tac-toe that affects
//! its outcome. Drawing the board, animating marks and handling windows are
//! left to whichever front end consumes it.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s addressed by [`Position`]
//! - **Rules**: pure functions for legality, winners and outcomes
//! - **Evaluator**: heuristic score of a board for one player
//! - **Strategies**: [`EasyStrategy`] (greedy, weighted random) and
//!   [`HardStrategy`] (minimax with alpha-beta pruning)
//! - **Controller**: [`GameController`] drives menu, play and reset,
//!   and reports what happened as [`GameEvent`]s
//!
//! # Example
//!
//! ```
//! use noughts_engine::{EngineSettings, GameController, GameMode, Outcome};
//!
//! # fn example() -> Result<(), noughts_engine::GameError> {
//! let mut controller = GameController::new(EngineSettings::default());
//! controller.set_mode(GameMode::VsHardAi)?;
//!
//! // The human plays X; the computer answers before the call returns.
//! let events = controller.apply_move(1, 1)?;
//! assert!(!events.is_empty());
//! assert_eq!(controller.outcome(), Some(Outcome::InProgress));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod controller;
mod error;
mod evaluator;
mod events;
mod invariants;
mod mode;
mod outcome;
mod position;
mod rules;
mod session;
mod settings;
mod strategy;
mod types;

// Crate-level exports - Board and pieces
pub use position::Position;
pub use types::{Board, Cell, Player};

// Crate-level exports - Moves and errors
pub use action::Move;
pub use error::{BoardParseError, GameError};

// Crate-level exports - Rules
pub use outcome::Outcome;
pub use rules::{LineEndpoints, is_draw, is_full, is_legal_move, outcome, winner, winning_line};

// Crate-level exports - Evaluation and strategies
pub use evaluator::{WIN_SCORE, evaluate};
pub use strategy::{
    DEFAULT_SEARCH_DEPTH, Difficulty, DrawSource, EasyStrategy, HardStrategy, SearchReport,
    Strategy, blocking_move, cell_weight, weighted_pick, winning_move,
};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, MoveContract};
pub use invariants::{
    BalancedMarksInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, SessionInvariants, SingleWinnerInvariant,
};

// Crate-level exports - Sessions and control
pub use controller::{GameController, Phase};
pub use events::GameEvent;
pub use mode::GameMode;
pub use session::GameSession;
pub use settings::EngineSettings;
