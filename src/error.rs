use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid unit must be non-zero")]
    ZeroUnit,
    #[error("screen {dimension} must be non-zero")]
    ZeroDimension { dimension: &'static str },
    #[error("grid unit {unit} does not evenly divide screen {dimension} {value}")]
    UnevenUnit { dimension: &'static str, value: u32, unit: u32 },
    #[error("screen {dimension} {value} is too large")]
    TooLarge { dimension: &'static str, value: u32 },
    #[error("a {columns}x{rows} grid leaves no room for food")]
    TooFewCells { columns: u32, rows: u32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FoodError {
    #[error("all {cells} cells are occupied, nowhere to place food")]
    BoardFull { cells: usize },
}
