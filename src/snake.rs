use std::collections::{HashSet, VecDeque};

use crate::grid::{Cell, Grid};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit vector of the direction, with y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// What a single step changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub new_head: Cell,
    pub old_head: Cell,
    /// The vacated tail cell, `None` while the snake is growing.
    pub old_tail: Option<Cell>,
}

pub struct Snake {
    body: VecDeque<Cell>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    last_erased: Option<Cell>,
    origin: Cell,
}

impl Snake {
    const INITIAL_DIRECTION: Direction = Right;

    pub fn new(origin: Cell) -> Self {
        Snake {
            body: VecDeque::from(vec![origin]),
            length: 1,
            direction: Self::INITIAL_DIRECTION,
            next_direction: None,
            last_erased: None,
            origin,
        }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Number of cells currently on the board.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Number of cells the snake is growing towards.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_erased(&self) -> Option<Cell> {
        self.last_erased
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Queue a turn for the next step. Turning straight back is ignored,
    /// the head would run into the neck.
    pub fn request_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.next_direction = Some(new_direction);
        }
    }

    pub fn apply_requested_direction(&mut self) {
        if let Some(dir) = self.next_direction.take() {
            self.direction = dir;
        }
    }

    pub fn move_step(&mut self, grid: &Grid) -> MoveResult {
        let old_head = self.head();
        let new_head = grid.advance(old_head, self.direction);

        self.body.push_front(new_head);

        let old_tail = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };

        self.last_erased = old_tail;
        MoveResult { new_head, old_head, old_tail }
    }

    pub fn ate(&self, food: Cell) -> bool {
        self.head() == food
    }

    /// Takes effect on the next step, which skips trimming the tail.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn self_collided(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Back to a single cell at the origin. Returns the cells that were given
    /// up, including a tail vacated by the last step that was not yet erased.
    pub fn reset(&mut self) -> Vec<Cell> {
        let old_body = std::mem::replace(&mut self.body, VecDeque::from(vec![self.origin]));
        let mut discarded: Vec<Cell> = old_body.into_iter().collect();
        discarded.extend(self.last_erased.take());

        self.length = 1;
        self.direction = Self::INITIAL_DIRECTION;
        self.next_direction = None;
        discarded
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }

    #[cfg(test)]
    pub fn with_body(origin: Cell, body: Vec<Cell>, direction: Direction) -> Self {
        let length = body.len();
        Snake { body: body.into(), length, direction, next_direction: None, last_erased: None, origin }
    }
}
