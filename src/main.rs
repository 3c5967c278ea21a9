mod config;
mod error;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod state;
mod term;
mod timer;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::WriteLogger;

use config::Config;
use game::{Flow, SnakeGame};

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() -> Result<()> {
    let config = Config::parse();

    // The terminal belongs to the game, so logs go to a file
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("could not create log file {}", config.log_file.display()))?;
    WriteLogger::init(config.log_level(), simplelog::Config::default(), log_file)?;

    info!("starting with {:?}", config);

    let mut game = SnakeGame::new(config)?;

    let played = run(&mut game);
    let restored = game.restore();

    info!("bye");
    first_error(played, restored)
}

fn run(game: &mut SnakeGame) -> Result<()> {
    game.initialize()?;
    if game.show_intro()? == Flow::Quit {
        return Ok(());
    }
    game.play()
}

/// The game's own failure wins over a failure to restore the terminal,
/// which then only gets logged.
fn first_error(played: Result<()>, restored: Result<()>) -> Result<()> {
    match (played, restored) {
        (Err(e), Err(restore_err)) => {
            error!("{:#}", restore_err);
            Err(e)
        }
        (played, restored) => played.and(restored),
    }
}
