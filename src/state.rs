use log::{debug, info, trace};
use rand::Rng;

use crate::error::FoodError;
use crate::food::Food;
use crate::grid::{Cell, Grid};
use crate::snake::{Direction, MoveResult, Snake};

/// What happened during one tick, for the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved(MoveResult),
    Ate(MoveResult),
    /// The head ran into the body and the snake started over.
    Collided { discarded: Vec<Cell> },
    /// The snake covers the whole board, so the round started over.
    BoardFilled { discarded: Vec<Cell> },
}

/// One snake and one piece of food on a wrapping grid.
pub struct GameState<R> {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: R,
}

impl<R: Rng> GameState<R> {
    pub fn new(grid: Grid, mut rng: R) -> Result<Self, FoodError> {
        let snake = Snake::new(grid.center());
        let food = Food::new(&grid, &snake.occupied(), &mut rng)?;
        Ok(GameState { grid, snake, food, rng })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn request_direction(&mut self, dir: Direction) {
        self.snake.request_direction(dir);
    }

    /// Advances the game by one step. A collision resets the snake before
    /// returning, so the overlapping frame is never drawn.
    pub fn tick(&mut self) -> Result<TickOutcome, FoodError> {
        self.snake.apply_requested_direction();
        let step = self.snake.move_step(&self.grid);
        trace!("head {} -> {}", step.old_head, step.new_head);

        let mut outcome = TickOutcome::Moved(step);

        if self.snake.ate(self.food.cell()) {
            self.snake.grow();
            debug!("ate food at {}, length now {}", step.new_head, self.snake.length());

            match self.food.relocate(&self.grid, &self.snake.occupied(), &mut self.rng) {
                Ok(_) => outcome = TickOutcome::Ate(step),
                Err(FoodError::BoardFull { cells }) => {
                    info!("snake of length {} filled all {} cells", self.snake.length(), cells);
                    let discarded = self.restart()?;
                    return Ok(TickOutcome::BoardFilled { discarded });
                }
            }
        }

        if self.snake.self_collided() {
            info!("snake hit itself at {} with {} cells", step.new_head, self.snake.len());
            let discarded = self.restart()?;
            return Ok(TickOutcome::Collided { discarded });
        }

        Ok(outcome)
    }

    fn restart(&mut self) -> Result<Vec<Cell>, FoodError> {
        let discarded = self.snake.reset();
        if self.snake.occupies(self.food.cell()) {
            self.food.relocate(&self.grid, &self.snake.occupied(), &mut self.rng)?;
        }
        Ok(discarded)
    }

    #[cfg(test)]
    pub(crate) fn with_parts(grid: Grid, snake: Snake, food_cell: Cell, rng: R) -> Self {
        GameState { grid, snake, food: Food::placed(food_cell), rng }
    }
}
