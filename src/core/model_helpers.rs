use crate::core::errors::RulesError;
use crate::core::grid::Grid;
use crate::core::models::{Cell, Direction, GameChangeType, MoveCode, MoveOutcome, Vec2};

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }

    pub fn from_delta(dx: i32, dy: i32) -> Result<Direction, RulesError> {
        match (dx, dy) {
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            _ => Err(RulesError::UnknownDirection { dx, dy }),
        }
    }

    pub fn code(&self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }
}

impl MoveCode {
    pub fn is_push(&self) -> bool {
        self.change == GameChangeType::PlayerAndBoxMove
    }

    pub fn as_char(&self) -> char {
        let code = self.direction.code();
        if self.is_push() {
            code.to_ascii_uppercase()
        } else {
            code
        }
    }

    pub fn from_char(code: char) -> Option<MoveCode> {
        let direction = Direction::ALL
            .into_iter()
            .find(|d| d.code() == code.to_ascii_lowercase())?;
        let change = if code.is_ascii_uppercase() {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        };
        Some(MoveCode { direction, change })
    }
}

impl MoveOutcome {
    pub fn moved(&self) -> Option<MoveCode> {
        match self {
            MoveOutcome::Moved(code) => Some(*code),
            MoveOutcome::Rejected(_) => None,
        }
    }
}

impl Grid {
    /// Won once no box is left off a goal. The player's position is irrelevant.
    pub fn has_won(&self) -> bool {
        !self.iter_cells().any(|(_, cell)| cell == Cell::BOX)
    }

    pub fn count_boxes(&self) -> usize {
        self.iter_cells().filter(|(_, cell)| cell.has_box()).count()
    }

    pub fn count_boxes_on_goals(&self) -> usize {
        self.iter_cells()
            .filter(|&(_, cell)| cell == Cell::BOX_ON_GOAL)
            .count()
    }

    pub fn count_goals(&self) -> usize {
        self.iter_cells().filter(|(_, cell)| cell.is_goal()).count()
    }

    pub fn count_players(&self) -> usize {
        self.iter_cells().filter(|(_, cell)| cell.has_player()).count()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_delta_accepts_only_unit_vectors() {
        for direction in Direction::ALL {
            let delta = direction.delta();
            assert_eq!(Direction::from_delta(delta.x, delta.y), Ok(direction));
        }
        assert_eq!(
            Direction::from_delta(1, 1),
            Err(RulesError::UnknownDirection { dx: 1, dy: 1 })
        );
        assert!(Direction::from_delta(0, 0).is_err());
        assert!(Direction::from_delta(2, 0).is_err());
    }

    #[test]
    fn move_code_case_encodes_push() {
        let push = MoveCode {
            direction: Direction::Right,
            change: GameChangeType::PlayerAndBoxMove,
        };
        let step = MoveCode {
            direction: Direction::Up,
            change: GameChangeType::PlayerMove,
        };
        assert_eq!(push.as_char(), 'R');
        assert_eq!(step.as_char(), 'u');
        assert_eq!(MoveCode::from_char('R'), Some(push));
        assert_eq!(MoveCode::from_char('u'), Some(step));
        assert_eq!(MoveCode::from_char('x'), None);
    }

    #[test]
    fn won_when_no_plain_box_remains() {
        let won = Grid::parse("#@*.#").unwrap();
        assert!(won.has_won());

        let not_won = Grid::parse("#@*$.#").unwrap();
        assert!(!not_won.has_won());

        // no boxes at all still counts as won
        assert!(Grid::parse("#@ #").unwrap().has_won());
    }

    #[test]
    fn counts() {
        let grid = Grid::parse("#@*$.+#").unwrap();
        assert_eq!(grid.count_boxes(), 2);
        assert_eq!(grid.count_boxes_on_goals(), 1);
        assert_eq!(grid.count_goals(), 3);
        assert_eq!(grid.count_players(), 2);
    }
}
