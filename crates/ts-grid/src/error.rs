//! Error types for ts-grid.

use thiserror::Error;

/// Errors raised while materializing a painted grid.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,

    #[error("grid is not square: {rows} rows but row {row} has {cols} columns")]
    NotSquare { rows: usize, row: usize, cols: usize },

    #[error("unknown tile code {code:?} at (col {col}, row {row})")]
    UnknownCode { code: String, col: usize, row: usize },

    #[error("road tile {code:?} at (col {col}, row {row}) has no travel direction")]
    MissingDirection { code: String, col: usize, row: usize },

    #[error("tile size must be positive, got {0}")]
    BadTileSize(f32),
}

pub type GridResult<T> = Result<T, GridError>;
