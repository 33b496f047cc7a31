use serde::{Deserialize, Serialize};

use crate::game::Score;

/// Serializable summary of a session, written out when a player quits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub level: String,
    pub board: String,
    pub solution: String,
    pub score: Score,
    pub won: bool,
}

impl GameReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
