//! A perfect agent for playing or analysing the board game 'Tic-Tac-Toe'
//!
//! This agent uses an exhaustive minimax game tree search to find the
//! mathematically optimal move(s) for any position.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_ai::{board::{Board, Player}, rng::GameRng, solver::Solver};
//!
//!# fn main() -> Result<(), tictactoe_ai::Error> {
//! let mut board: Board = "XX- OO- ---".parse()?;
//! let solver = Solver::new(Player::X);
//!
//! assert_eq!(solver.candidates(&mut board, Player::X)?, vec![2]);
//! assert_eq!(solver.best_move(&mut board, Player::X, &mut GameRng::new(7))?, 2);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

#[macro_use]
pub mod logger;

pub mod error;

pub mod board;

pub mod rng;

pub mod solver;

pub mod self_play;

mod test;

pub use error::{Error, Result};

/// The width and height of the game board in cells
pub const SIZE: usize = 3;

/// The number of cells on the game board
pub const CELLS: usize = SIZE * SIZE;

/// The score of a position the solver has won
pub const WIN_SCORE: i32 = 10;
/// The score of a drawn position
pub const DRAW_SCORE: i32 = 5;
/// The score of a position the solver has lost
pub const LOSS_SCORE: i32 = 0;

// cells are addressed by a single row-major index
const_assert_eq!(CELLS, SIZE * SIZE);
const_assert!(LOSS_SCORE < DRAW_SCORE && DRAW_SCORE < WIN_SCORE);
