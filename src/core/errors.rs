use thiserror::Error;

use crate::core::models::Vec2;

/// Problems found while turning level text into a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,
    #[error("unknown symbol {symbol:?} at {position}")]
    UnknownSymbol { symbol: char, position: Vec2 },
    #[error("level must contain exactly one player, found {0}")]
    PlayerCount(usize),
    #[error("row {row} is {width} cells wide, expected {expected}")]
    Jagged { row: usize, width: usize, expected: usize },
}

/// Invariant violations hit while evaluating a move. These mean the caller
/// handed over a corrupted grid or a bad vector, never that the move was merely illegal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("unknown direction ({dx}, {dy})")]
    UnknownDirection { dx: i32, dy: i32 },
    #[error("grid has no player")]
    PlayerNotFound,
    #[error("unexpected cell {symbol:?} at {position}")]
    InconsistentCell { symbol: char, position: Vec2 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("invalid direction code {code:?} at index {index}")]
    UnknownCode { code: char, index: usize },
    #[error("move {code:?} at index {index} could not be replayed")]
    Diverged { code: char, index: usize },
    #[error(transparent)]
    Rules(#[from] RulesError),
}
