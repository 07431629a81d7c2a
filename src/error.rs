use thiserror::Error;

use crate::maze::Coord;

/// Errors raised while building or inspecting a maze.
#[derive(Debug, Error, PartialEq)]
pub enum MazeError {
    /// Both grid dimensions must be at least 1.
    #[error("invalid grid shape {rows}x{cols}: both dimensions must be positive")]
    InvalidGridShape { rows: usize, cols: usize },
    /// Percolation probability outside `[0, 1]` (or NaN).
    #[error("percolation probability must be between 0 and 1, got {0}")]
    InvalidProbability(f64),
    #[error("coordinate {coord:?} is out of bounds for grid shape {grid_shape:?}")]
    CoordOutOfBounds {
        coord: Coord,
        grid_shape: (usize, usize),
    },
    #[error("unknown generator name: {0:?}")]
    UnknownGenerator(String),
    /// A raw connection list did not hold `2 * rows * cols` values.
    #[error("connection list needs {expected} values, got {actual}")]
    ConnectionListLength { expected: usize, actual: usize },
    #[error("connection lists have different shapes: {left:?} and {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("invalid solution path: {0}")]
    InvalidSolution(String),
    #[error("no two distinct connected cells to use as path endpoints")]
    NoValidEndpoints,
    /// An internal invariant was broken. This is a logic defect, never a recoverable condition.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

pub type Result<T> = std::result::Result<T, MazeError>;
