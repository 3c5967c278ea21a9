use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::error::ConfigError;
use crate::grid::Grid;

/// Snake on a wrapping grid, played in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "snake", version)]
pub struct Config {
    /// Playfield width in screen units.
    #[arg(long, value_name = "UNITS", default_value_t = 640)]
    pub width: u32,
    /// Playfield height in screen units.
    #[arg(long, value_name = "UNITS", default_value_t = 480)]
    pub height: u32,
    /// Side of one grid cell. Must evenly divide the width and the height.
    #[arg(long, value_name = "UNITS", default_value_t = 20)]
    pub unit: u32,
    /// Snake steps per second.
    #[arg(
        long,
        value_name = "TICKS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub speed: u32,
    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Where to write the log. The terminal itself is taken by the game.
    #[arg(long, value_name = "PATH", default_value = "snake.log")]
    pub log_file: PathBuf,
    /// Log more; repeat for even more.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.width, self.height, self.unit)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = Config::try_parse_from(["snake"]).unwrap();
        let grid = config.grid().unwrap();
        assert_eq!((grid.columns(), grid.rows()), (32, 24));
        assert_eq!(config.frame_interval(), Duration::from_millis(100));
        assert_eq!(config.seed, None);
        assert_eq!(config.log_file, PathBuf::from("snake.log"));
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "snake", "--width", "200", "--height", "100", "--unit", "10", "--speed", "20", "--seed", "5", "-vv",
        ])
        .unwrap();
        assert_eq!(config.grid().unwrap().cell_count(), 200);
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn uneven_unit_is_rejected_when_building_the_grid() {
        let config = Config::try_parse_from(["snake", "--unit", "128"]).unwrap();
        assert_eq!(
            config.grid(),
            Err(ConfigError::UnevenUnit { dimension: "height", value: 480, unit: 128 })
        );
    }

    #[test]
    fn speed_out_of_range() {
        assert!(Config::try_parse_from(["snake", "--speed", "0"]).is_err());
        assert!(Config::try_parse_from(["snake", "--speed", "61"]).is_err());
    }
}
