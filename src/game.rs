use anyhow::{bail, Context, Result};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::Config;
use crate::grid::Grid;
use crate::input::{intent, Intent};
use crate::render::{paint_tick, Playfield, Render};
use crate::state::{GameState, TickOutcome};
use crate::term::TermManager;
use crate::timer::FrameTimer;

/// Whether the player wants to keep going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct SnakeGame {
    config: Config,
    grid: Grid,
    paused: bool,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(config: Config) -> Result<Self> {
        let grid = config.grid().context("invalid playfield")?;
        let term = TermManager::new().context("could not query the terminal")?;
        Ok(SnakeGame { config, grid, paused: false, term })
    }

    pub fn initialize(&mut self) -> Result<()> {
        let (need_w, need_h) = Playfield::size(&self.grid).with_context(|| {
            format!("a {}x{} grid does not fit in any terminal", self.grid.columns(), self.grid.rows())
        })?;
        let (w, h) = self.term.get_terminal_size();
        if w < need_w || h < need_h {
            bail!(
                "terminal is {}x{} but a {}x{} grid needs at least {}x{}",
                w, h, self.grid.columns(), self.grid.rows(), need_w, need_h
            );
        }

        self.term.setup().context("could not set up the terminal")?;
        Ok(())
    }

    pub fn show_intro(&mut self) -> Result<Flow> {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "Q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        let key = self.term.read_key_blocking()?;
        if intent(&key) == Some(Intent::Quit) {
            return Ok(Flow::Quit);
        }

        self.term.hide_message()?;
        Ok(Flow::Continue)
    }

    /// Runs until the player quits. Collisions restart the snake in place.
    pub fn play(&mut self) -> Result<()> {
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut state = GameState::new(self.grid, rng)?;
        let mut timer = FrameTimer::new(self.config.frame_interval());

        self.draw_board(&state)?;
        info!("playing on a {}x{} grid, one step every {:?}", self.grid.columns(), self.grid.rows(), timer.interval());

        loop {
            timer.wait();

            for key_ev in self.term.read_key_events_queue()? {
                match intent(&key_ev) {
                    Some(Intent::Quit) => return Ok(()),
                    Some(Intent::TogglePause) => self.toggle_pause()?,
                    Some(Intent::Turn(dir)) if !self.paused => state.request_direction(dir),
                    _ => {}
                }
            }

            if self.paused { continue; }

            let outcome = state.tick()?;
            self.draw_tick(&state, &outcome)?;
        }
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore().context("could not restore the terminal")?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_board(&mut self, state: &GameState<StdRng>) -> Result<()> {
        self.term.clear()?;
        let size = Playfield::size(state.grid()).context("playfield does not fit in the terminal")?;
        self.term.draw_borders(size)?;

        let mut field = Playfield::new(&mut self.term, state.grid());
        state.snake().render(&mut field)?;
        state.food().render(&mut field)?;
        self.term.flush()?;
        Ok(())
    }

    fn draw_tick(&mut self, state: &GameState<StdRng>, outcome: &TickOutcome) -> Result<()> {
        if let TickOutcome::Collided { discarded } | TickOutcome::BoardFilled { discarded } = outcome {
            debug!("clearing {} cells after restart", discarded.len());
        }

        let mut field = Playfield::new(&mut self.term, state.grid());
        paint_tick(&mut field, state, outcome)?;
        self.term.flush()?;
        Ok(())
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Q to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
        Ok(())
    }
}
