//! Rules engine for Sokoban-style box pushing: level parsing, move
//! validation, win detection, and a play session with undo and a replayable
//! move log.

pub mod config;
pub mod core;
pub mod game;
pub mod report;

#[cfg(test)]
mod test;

pub use config::GameConfig;
pub use crate::core::{
    Cell, Direction, Grid, LevelError, MoveCode, MoveOutcome, Rejection, ReplayError, RulesError,
    Vec2,
};
pub use game::{Game, Score};
pub use report::GameReport;
