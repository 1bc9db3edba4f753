//! Error types for the tic-tac-toe engine

use thiserror::Error;

use crate::CELLS;

/// Errors raised by the board and the solver
///
/// An occupied cell is not an error, [`Board::set_cell`](crate::board::Board::set_cell)
/// reports it by returning `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {index} out of range, cells must be between 0 and {}", CELLS - 1)]
    OutOfRangeCell { index: usize },

    #[error("no free cells to choose a move from")]
    EmptyCandidateSet,

    #[error("invalid board: expected {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' for cell {position}")]
    InvalidCellCharacter { character: char, position: usize },
}

/// Convenience alias for results carrying an engine [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
