use std::{convert::TryFrom, fmt};

use crate::error::ConfigError;
use crate::snake::Direction;

/// A grid-aligned position, in screen units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The playfield: a `width` x `height` screen cut into square cells of
/// `unit` per side. Edges wrap around in both axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    unit: i32,
}

impl Grid {
    pub fn new(width: u32, height: u32, unit: u32) -> Result<Self, ConfigError> {
        if unit == 0 {
            return Err(ConfigError::ZeroUnit);
        }

        for (dimension, value) in [("width", width), ("height", height)] {
            if value == 0 {
                return Err(ConfigError::ZeroDimension { dimension });
            }
            if value % unit != 0 {
                return Err(ConfigError::UnevenUnit { dimension, value, unit });
            }
            if i32::try_from(value).is_err() {
                return Err(ConfigError::TooLarge { dimension, value });
            }
        }

        let (columns, rows) = (width / unit, height / unit);
        if (columns as u64) * (rows as u64) < 2 {
            return Err(ConfigError::TooFewCells { columns, rows });
        }

        Ok(Grid { width: width as i32, height: height as i32, unit: unit as i32 })
    }

    pub fn columns(&self) -> i32 {
        self.width / self.unit
    }

    pub fn rows(&self) -> i32 {
        self.height / self.unit
    }

    pub fn cell_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Where a fresh snake starts. Snapped to the lattice, so odd column or
    /// row counts round down.
    pub fn center(&self) -> Cell {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.unit, row * self.unit)
    }

    /// Column and row of a cell.
    pub fn position(&self, cell: Cell) -> (i32, i32) {
        (cell.x / self.unit, cell.y / self.unit)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x % self.unit == 0
            && cell.y % self.unit == 0
    }

    /// The neighbour of `cell` one step towards `direction`. Stepping off an
    /// edge re-enters from the opposite one.
    pub fn advance(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(
            (cell.x + dx * self.unit).rem_euclid(self.width),
            (cell.y + dy * self.unit).rem_euclid(self.height),
        )
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |column| self.cell_at(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;

    fn grid() -> Grid {
        Grid::new(640, 480, 20).unwrap()
    }

    #[test]
    fn dimensions() {
        let g = grid();
        assert_eq!((g.columns(), g.rows()), (32, 24));
        assert_eq!(g.cell_count(), 768);
        assert_eq!(g.center(), Cell::new(320, 240));
        assert_eq!(g.cells().count(), 768);
    }

    #[test]
    fn rejects_bad_geometry() {
        assert_eq!(Grid::new(640, 480, 0), Err(ConfigError::ZeroUnit));
        assert_eq!(Grid::new(0, 480, 20), Err(ConfigError::ZeroDimension { dimension: "width" }));
        assert_eq!(
            Grid::new(640, 470, 20),
            Err(ConfigError::UnevenUnit { dimension: "height", value: 470, unit: 20 })
        );
        assert_eq!(Grid::new(20, 20, 20), Err(ConfigError::TooFewCells { columns: 1, rows: 1 }));
        assert!(matches!(Grid::new(u32::MAX, 20, 1), Err(ConfigError::TooLarge { dimension: "width", .. })));
        assert!(Grid::new(40, 20, 20).is_ok());
    }

    #[test]
    fn advance_inside_the_grid() {
        let g = grid();
        let c = Cell::new(100, 100);
        assert_eq!(g.advance(c, Up), Cell::new(100, 80));
        assert_eq!(g.advance(c, Down), Cell::new(100, 120));
        assert_eq!(g.advance(c, Left), Cell::new(80, 100));
        assert_eq!(g.advance(c, Right), Cell::new(120, 100));
    }

    #[test]
    fn advance_wraps_every_edge() {
        let g = grid();
        assert_eq!(g.advance(Cell::new(620, 40), Right), Cell::new(0, 40));
        assert_eq!(g.advance(Cell::new(0, 40), Left), Cell::new(620, 40));
        assert_eq!(g.advance(Cell::new(60, 0), Up), Cell::new(60, 460));
        assert_eq!(g.advance(Cell::new(60, 460), Down), Cell::new(60, 0));
        assert_eq!(g.advance(Cell::new(0, 0), Up), Cell::new(0, 460));
    }

    #[test]
    fn wraps_along_the_whole_boundary() {
        let g = grid();
        for row in 0..g.rows() {
            let right_edge = g.cell_at(g.columns() - 1, row);
            assert_eq!(g.advance(right_edge, Right), g.cell_at(0, row));
            assert_eq!(g.advance(g.cell_at(0, row), Left), right_edge);
        }
        for column in 0..g.columns() {
            let bottom_edge = g.cell_at(column, g.rows() - 1);
            assert_eq!(g.advance(bottom_edge, Down), g.cell_at(column, 0));
            assert_eq!(g.advance(g.cell_at(column, 0), Up), bottom_edge);
        }
    }

    #[test]
    fn contains_only_aligned_in_bounds_cells() {
        let g = grid();
        assert!(g.contains(Cell::new(0, 0)));
        assert!(g.contains(Cell::new(620, 460)));
        assert!(!g.contains(Cell::new(640, 0)));
        assert!(!g.contains(Cell::new(-20, 0)));
        assert!(!g.contains(Cell::new(10, 0)));
        assert_eq!(g.position(Cell::new(620, 460)), (31, 23));
    }

    #[test]
    fn center_snaps_to_lattice() {
        let g = Grid::new(660, 60, 20).unwrap();
        assert_eq!(g.center(), Cell::new(320, 20));
        assert!(g.contains(g.center()));
    }
}
