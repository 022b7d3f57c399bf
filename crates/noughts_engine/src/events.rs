//! Notifications emitted by the controller.

use super::{GameMode, Move, Outcome, Player};
use serde::{Deserialize, Serialize};

/// Something a front end may want to react to.
///
/// Every successful controller command returns the events it caused, in
/// the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameEvent {
    /// A fresh session began, from the menu or from a reset.
    #[display("New {} game", mode.label())]
    SessionStarted {
        /// Mode of the new session.
        mode: GameMode,
    },
    /// The computer chose a cell. Followed by the matching `MovePlayed`.
    #[display("Computer chose {}", _0.position)]
    AiMoveSelected(Move),
    /// A mark was placed.
    #[display("{}", _0)]
    MovePlayed(Move),
    /// The turn passed to this player.
    #[display("{} to move", _0)]
    ActivePlayerChanged(Player),
    /// The game ended.
    #[display("{}", _0)]
    OutcomeDecided(Outcome),
    /// The session was discarded.
    #[display("Returned to menu")]
    ReturnedToMenu,
}
