use serde::{Deserialize, Serialize};

use crate::core::{Grid, LevelError};

/// Level validation and play policy for a [`crate::game::Game`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Refuse levels without exactly one player.
    pub require_single_player: bool,
    /// Refuse levels whose rows differ in length.
    pub require_rectangular: bool,
    /// When false, moves on a solved board are rejected.
    pub allow_moves_after_win: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            require_single_player: true,
            require_rectangular: false,
            allow_moves_after_win: true,
        }
    }
}

impl GameConfig {
    /// Accepts anything that parses.
    pub fn lenient() -> Self {
        Self {
            require_single_player: false,
            require_rectangular: false,
            allow_moves_after_win: true,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn validate(&self, grid: &Grid) -> Result<(), LevelError> {
        if self.require_single_player {
            let players = grid.count_players();
            if players != 1 {
                return Err(LevelError::PlayerCount(players));
            }
        }
        if self.require_rectangular {
            if let Some((row, width, expected)) = grid.jagged_row() {
                return Err(LevelError::Jagged { row, width, expected });
            }
        }
        Ok(())
    }
}
