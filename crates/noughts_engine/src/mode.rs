//! Game modes offered from the menu.

use super::Player;
use super::strategy::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who sits on each side of the board.
///
/// In the computer modes the human plays X and moves first; the computer
/// plays O and answers each human move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[serde(rename = "pvp")]
    #[strum(to_string = "pvp", serialize = "player-vs-player")]
    PlayerVsPlayer,
    /// Human against the easy strategy.
    #[serde(rename = "easy")]
    #[strum(to_string = "easy", serialize = "vs-easy-ai")]
    VsEasyAi,
    /// Human against the hard strategy.
    #[default]
    #[serde(rename = "hard")]
    #[strum(to_string = "hard", serialize = "vs-hard-ai")]
    VsHardAi,
}

impl GameMode {
    /// Menu label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "Player vs Player",
            Self::VsEasyAi => "Player vs AI (Easy)",
            Self::VsHardAi => "Player vs AI (Hard)",
        }
    }

    /// Difficulty of the computer opponent, if there is one.
    #[instrument]
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            Self::PlayerVsPlayer => None,
            Self::VsEasyAi => Some(Difficulty::Easy),
            Self::VsHardAi => Some(Difficulty::Hard),
        }
    }

    /// The side the computer plays, if any.
    pub fn ai_player(self) -> Option<Player> {
        self.difficulty().map(|_| Player::O)
    }
}
