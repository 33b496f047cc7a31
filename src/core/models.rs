use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Empty,
    Player,
    Box,
}

/// An open (non-wall) cell: what stands on it, and whether it is a goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub occupant: Occupant,
    pub goal: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open(Square),
}

impl Cell {
    pub const WALL: Cell = Cell::Wall;
    pub const FLOOR: Cell = Cell::open(Occupant::Empty, false);
    pub const GOAL: Cell = Cell::open(Occupant::Empty, true);
    pub const PLAYER: Cell = Cell::open(Occupant::Player, false);
    pub const PLAYER_ON_GOAL: Cell = Cell::open(Occupant::Player, true);
    pub const BOX: Cell = Cell::open(Occupant::Box, false);
    pub const BOX_ON_GOAL: Cell = Cell::open(Occupant::Box, true);

    pub const fn open(occupant: Occupant, goal: bool) -> Cell {
        Cell::Open(Square { occupant, goal })
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        Some(match symbol {
            '#' => Cell::WALL,
            ' ' => Cell::FLOOR,
            '.' => Cell::GOAL,
            '@' => Cell::PLAYER,
            '+' => Cell::PLAYER_ON_GOAL,
            '$' => Cell::BOX,
            '*' => Cell::BOX_ON_GOAL,
            _ => return None,
        })
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open(Square { occupant, goal }) => match (occupant, goal) {
                (Occupant::Empty, false) => ' ',
                (Occupant::Empty, true) => '.',
                (Occupant::Player, false) => '@',
                (Occupant::Player, true) => '+',
                (Occupant::Box, false) => '$',
                (Occupant::Box, true) => '*',
            },
        }
    }

    pub fn occupant(&self) -> Option<Occupant> {
        match self {
            Cell::Wall => None,
            Cell::Open(square) => Some(square.occupant),
        }
    }

    /// Floor or goal with nothing on it.
    pub fn is_walkable(&self) -> bool {
        self.occupant() == Some(Occupant::Empty)
    }

    pub fn has_box(&self) -> bool {
        self.occupant() == Some(Occupant::Box)
    }

    pub fn has_player(&self) -> bool {
        self.occupant() == Some(Occupant::Player)
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Cell::Open(Square { goal: true, .. }))
    }
}

/// Grid position; `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

/// One applied move as it appears in the solution log: `u d l r` for a step,
/// `U D L R` for a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCode {
    pub direction: Direction,
    pub change: GameChangeType,
}

/// Why a move was refused. Refusals never touch the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    Wall,
    OutOfBounds,
    PushBlocked,
    PushDisabled,
    AlreadyWon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(MoveCode),
    Rejected(Rejection),
}
