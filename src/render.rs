use crossterm::style::Color;
use rand::Rng;

use crate::food::Food;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;
use crate::state::{GameState, TickOutcome};
use crate::term::TermManager;
use crate::{Coords, TermInt};

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = '●';

/// What a cell should look like.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paint {
    Background,
    Snake,
    Head(char),
    Food,
}

/// Anything a cell can be drawn onto.
pub trait Surface {
    type Error;

    fn paint(&mut self, cell: Cell, paint: Paint) -> Result<(), Self::Error>;
}

pub trait Render {
    fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error>;
}

impl Render for Snake {
    /// Clears the vacated tail before drawing, the head may have moved into it.
    fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        if let Some(cell) = self.last_erased() {
            surface.paint(cell, Paint::Background)?;
        }
        for &cell in self.body().iter().skip(1) {
            surface.paint(cell, Paint::Snake)?;
        }
        surface.paint(self.head(), Paint::Head(self.head_char()))
    }
}

impl Render for Food {
    fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.paint(self.cell(), Paint::Food)
    }
}

/// Paints what a tick changed. A restart first blanks every cell the old
/// snake gave up.
pub fn paint_tick<S: Surface, R: Rng>(surface: &mut S, state: &GameState<R>, outcome: &TickOutcome) -> Result<(), S::Error> {
    if let TickOutcome::Collided { discarded } | TickOutcome::BoardFilled { discarded } = outcome {
        for &cell in discarded {
            surface.paint(cell, Paint::Background)?;
        }
    }

    state.snake().render(surface)?;
    state.food().render(surface)
}

/// The grid drawn into the terminal, inside a one character border.
/// Cells are two columns wide so they come out roughly square.
pub struct Playfield<'a> {
    term: &'a mut TermManager,
    grid: &'a Grid,
}

impl<'a> Playfield<'a> {
    pub const CELL_WIDTH: TermInt = 2;

    pub fn new(term: &'a mut TermManager, grid: &'a Grid) -> Self {
        Playfield { term, grid }
    }

    /// Terminal columns and rows the playfield takes up, border included.
    /// `None` when no terminal could be that big.
    pub fn size(grid: &Grid) -> Option<Coords> {
        let width = grid.columns() as u64 * Self::CELL_WIDTH as u64 + 2;
        let height = grid.rows() as u64 + 2;
        Some((TermInt::try_from(width).ok()?, TermInt::try_from(height).ok()?))
    }

    fn glyph(paint: Paint) -> (char, char, Color) {
        match paint {
            Paint::Background => (' ', ' ', Color::Reset),
            Paint::Snake => (SNAKE_BODY_CHAR, SNAKE_BODY_CHAR, Color::Green),
            Paint::Head(ch) => (ch, ch, Color::Green),
            Paint::Food => (FOOD_CHAR, ' ', Color::Red),
        }
    }
}

impl Surface for Playfield<'_> {
    type Error = crossterm::ErrorKind;

    fn paint(&mut self, cell: Cell, paint: Paint) -> Result<(), Self::Error> {
        let (column, row) = self.grid.position(cell);
        let x = 1 + column as TermInt * Self::CELL_WIDTH;
        let y = 1 + row as TermInt;
        let (left, right, color) = Self::glyph(paint);

        self.term.print_at((x, y), left, color)?;
        self.term.print_at((x + 1, y), right, color)
    }
}
