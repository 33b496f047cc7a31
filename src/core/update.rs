use tracing::{trace, warn};

use crate::core::errors::RulesError;
use crate::core::grid::Grid;
use crate::core::models::{
    Cell, Direction, GameChangeType, MoveCode, MoveOutcome, Occupant, Rejection, Vec2,
};

/// A move that has been checked against a grid but not yet applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub direction: Direction,
    pub player: Vec2,
    pub target: Vec2,
    /// Where the pushed box ends up, if this is a push.
    pub box_target: Option<Vec2>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Legal(MovePlan),
    Rejected(Rejection),
}

impl MovePlan {
    pub fn code(&self) -> MoveCode {
        let change = if self.box_target.is_some() {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        };
        MoveCode {
            direction: self.direction,
            change,
        }
    }

    /// The box has to leave `target` before the player can enter it.
    pub fn apply(&self, grid: &mut Grid) -> MoveCode {
        if let Some(box_target) = self.box_target {
            transfer(grid, &self.target, &box_target);
        }
        transfer(grid, &self.player, &self.target);
        self.code()
    }
}

/// Checks whether the player may move in `direction` without touching the grid.
pub fn evaluate(
    grid: &Grid,
    direction: Direction,
    can_push: bool,
) -> Result<Verdict, RulesError> {
    let Some(player) = grid.player() else {
        warn!("move evaluated on a grid without a player");
        return Err(RulesError::PlayerNotFound);
    };
    let delta = direction.delta();
    let target = player + delta;

    let Some(dest) = grid.get(&target) else {
        return Ok(reject(direction, Rejection::OutOfBounds));
    };

    match dest.occupant() {
        None => Ok(reject(direction, Rejection::Wall)),
        Some(Occupant::Empty) => Ok(Verdict::Legal(MovePlan {
            direction,
            player,
            target,
            box_target: None,
        })),
        Some(Occupant::Box) if !can_push => Ok(reject(direction, Rejection::PushDisabled)),
        Some(Occupant::Box) => {
            let box_target = target + delta;
            match grid.get(&box_target) {
                Some(beyond) if beyond.is_walkable() => Ok(Verdict::Legal(MovePlan {
                    direction,
                    player,
                    target,
                    box_target: Some(box_target),
                })),
                _ => Ok(reject(direction, Rejection::PushBlocked)),
            }
        }
        Some(Occupant::Player) => {
            warn!(position = %target, "second player found next to the player");
            Err(RulesError::InconsistentCell {
                symbol: dest.symbol(),
                position: target,
            })
        }
    }
}

/// Evaluates and, when legal, applies the move in place.
pub fn step(
    grid: &mut Grid,
    direction: Direction,
    can_push: bool,
) -> Result<MoveOutcome, RulesError> {
    Ok(match evaluate(grid, direction, can_push)? {
        Verdict::Legal(plan) => MoveOutcome::Moved(plan.apply(grid)),
        Verdict::Rejected(rejection) => MoveOutcome::Rejected(rejection),
    })
}

fn reject(direction: Direction, rejection: Rejection) -> Verdict {
    trace!(?direction, ?rejection, "move rejected");
    Verdict::Rejected(rejection)
}

/// Moves whatever occupies `from` onto `to`. Goal flags stay with their cells.
/// Does nothing unless `from` is occupied and `to` is open and empty.
pub fn transfer(grid: &mut Grid, from: &Vec2, to: &Vec2) {
    let (Some(Cell::Open(source)), Some(Cell::Open(dest))) = (grid.get(from), grid.get(to)) else {
        return;
    };
    if source.occupant == Occupant::Empty || dest.occupant != Occupant::Empty {
        return;
    }

    grid.set(to, Cell::open(source.occupant, dest.goal));
    grid.set(from, Cell::open(Occupant::Empty, source.goal));
}
