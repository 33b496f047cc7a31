use std::fmt;
use std::sync::Arc;

use crate::core::errors::LevelError;
use crate::core::models::{Cell, Vec2};

/// One full board state, indexed `[y][x]`.
///
/// Rows are shared between clones and copied on first write, so snapshotting
/// a grid for the undo history costs one pointer per row until a move
/// actually touches it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Arc<Vec<Cell>>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Grid {
        Grid {
            rows: rows.into_iter().map(Arc::new).collect(),
        }
    }

    /// Zero-length lines are dropped; every other line becomes a row, one cell per character.
    pub fn parse(text: &str) -> Result<Grid, LevelError> {
        let mut rows = Vec::new();
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }

            let y = rows.len() as i32;
            let row = line
                .chars()
                .enumerate()
                .map(|(x, symbol)| {
                    Cell::from_symbol(symbol).ok_or(LevelError::UnknownSymbol {
                        symbol,
                        position: Vec2::new(x as i32, y),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(LevelError::Empty);
        }
        Ok(Grid::from_rows(rows))
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Width of the widest row.
    pub fn width(&self) -> i32 {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0) as i32
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    pub fn is_rectangular(&self) -> bool {
        self.jagged_row().is_none()
    }

    /// First row whose length differs from the first row, as `(row, width, expected)`.
    pub fn jagged_row(&self) -> Option<(usize, usize, usize)> {
        let expected = self.rows.first()?.len();
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
            .map(|(y, row)| (y, row.len(), expected))
    }

    pub fn get(&self, pos: &Vec2) -> Option<Cell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.rows
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    pub fn cell_mut(&mut self, pos: &Vec2) -> Option<&mut Cell> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let row = self.rows.get_mut(pos.y as usize)?;
        if pos.x as usize >= row.len() {
            return None;
        }
        Arc::make_mut(row).get_mut(pos.x as usize)
    }

    /// Returns false if `pos` lies outside the grid.
    pub fn set(&mut self, pos: &Vec2, cell: Cell) -> bool {
        match self.cell_mut(pos) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Vec2::new(x as i32, y as i32), cell))
        })
    }

    /// All positions holding exactly `cell`, top to bottom, left to right.
    pub fn find(&self, cell: Cell) -> Vec<Vec2> {
        self.iter_cells()
            .filter(|&(_, c)| c == cell)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// A plain player is preferred over one standing on a goal.
    pub fn player(&self) -> Option<Vec2> {
        self.find(Cell::PLAYER)
            .into_iter()
            .chain(self.find(Cell::PLAYER_ON_GOAL))
            .next()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row.iter() {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
