use std::collections::HashSet;

use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::error::FoodError;
use crate::grid::{Cell, Grid};

/// Rejected samples allowed per grid cell before placement stops guessing
/// and picks from the free cells directly.
const SAMPLES_PER_CELL: usize = 4;

pub struct Food {
    cell: Cell,
}

impl Food {
    pub fn new<R: Rng>(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Result<Self, FoodError> {
        let mut food = Food { cell: Cell::new(0, 0) };
        food.relocate(grid, occupied, rng)?;
        Ok(food)
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Moves the food to a uniformly random cell outside `occupied`.
    ///
    /// Guesses first, which is cheap while the board is mostly empty. Once a
    /// crowded board has burnt through the sampling budget it chooses among
    /// the remaining free cells, and reports a full board instead of looping.
    pub fn relocate<R: Rng>(&mut self, grid: &Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Result<Cell, FoodError> {
        let budget = grid.cell_count() * SAMPLES_PER_CELL;

        let sampled = (0..budget)
            .map(|_| grid.cell_at(rng.gen_range(0..grid.columns()), rng.gen_range(0..grid.rows())))
            .find(|cell| !occupied.contains(cell));

        let cell = match sampled {
            Some(cell) => cell,
            None => {
                let free: Vec<Cell> = grid.cells().filter(|cell| !occupied.contains(cell)).collect();
                *free.choose(rng).ok_or(FoodError::BoardFull { cells: grid.cell_count() })?
            }
        };

        debug_assert!(grid.contains(cell));
        debug!("food placed at {}", cell);
        self.cell = cell;
        Ok(cell)
    }

    #[cfg(test)]
    pub fn placed(cell: Cell) -> Self {
        Food { cell }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn never_lands_on_occupied_cells() {
        let grid = Grid::new(640, 480, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: HashSet<Cell> = grid.cells().filter(|c| (c.x / 20 + c.y / 20) % 3 != 0).collect();

        let mut food = Food::new(&grid, &occupied, &mut rng).unwrap();
        for _ in 0..500 {
            let cell = food.relocate(&grid, &occupied, &mut rng).unwrap();
            assert!(!occupied.contains(&cell));
            assert!(grid.contains(cell));
            assert_eq!(cell, food.cell());
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let grid = Grid::new(200, 100, 20).unwrap();
        let last = grid.cell_at(7, 3);
        let occupied: HashSet<Cell> = grid.cells().filter(|&c| c != last).collect();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let food = Food::new(&grid, &occupied, &mut rng).unwrap();
            assert_eq!(food.cell(), last);
        }
    }

    #[test]
    fn full_board_is_reported() {
        let grid = Grid::new(60, 40, 20).unwrap();
        let occupied: HashSet<Cell> = grid.cells().collect();
        let mut rng = StdRng::seed_from_u64(1);

        let err = Food::new(&grid, &occupied, &mut rng).err();
        assert_eq!(err, Some(FoodError::BoardFull { cells: 6 }));
    }

    #[test]
    fn failed_relocation_keeps_previous_cell() {
        let grid = Grid::new(60, 40, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut food = Food::new(&grid, &HashSet::new(), &mut rng).unwrap();
        let before = food.cell();

        let occupied: HashSet<Cell> = grid.cells().collect();
        assert!(food.relocate(&grid, &occupied, &mut rng).is_err());
        assert_eq!(food.cell(), before);
    }

    #[test]
    fn reaches_every_free_cell() {
        let grid = Grid::new(80, 40, 20).unwrap();
        let occupied: HashSet<Cell> = [grid.cell_at(0, 0)].iter().copied().collect();
        let mut rng = StdRng::seed_from_u64(11);
        let mut food = Food::new(&grid, &occupied, &mut rng).unwrap();

        let mut seen = HashSet::new();
        for _ in 0..400 {
            seen.insert(food.relocate(&grid, &occupied, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), grid.cell_count() - 1);
    }
}
