//! Engine tunables.

use super::strategy::DEFAULT_SEARCH_DEPTH;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Settings shared by every session a controller runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineSettings {
    /// Plies the hard strategy searches below each candidate move.
    #[serde(default = "default_search_depth")]
    search_depth: u8,

    /// Seed for the easy strategy's random draws. `None` seeds from the OS.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

#[instrument]
fn default_search_depth() -> u8 {
    DEFAULT_SEARCH_DEPTH
}

impl EngineSettings {
    /// Creates settings with the defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            search_depth: default_search_depth(),
            seed: None,
        }
    }
}
