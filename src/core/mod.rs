mod errors;
mod grid;
mod model_helpers;
mod models;
mod update;

pub use errors::{LevelError, ReplayError, RulesError};
pub use grid::Grid;
pub use models::{
    Cell, Direction, GameChangeType, MoveCode, MoveOutcome, Occupant, Rejection, Square, Vec2,
};
pub use update::{evaluate, step, transfer, MovePlan, Verdict};
