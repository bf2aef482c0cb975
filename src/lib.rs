//! A Connect 4 opponent for playing against from the terminal
//!
//! The computer picks its moves with a depth-limited minimax search using
//! alpha-beta pruning and a window-counting heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, search::Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the computer (player 2) has three in a row along the bottom
//! let board = Board::from_moves("7172631")?;
//! let mut searcher = Searcher::seeded(0);
//! let best_move = searcher.choose_move(&board, 4);
//!
//! assert_eq!(best_move, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod search;

pub mod game;

pub mod config;


pub use board::{Board, Cell};
pub use error::{ConfigError, MoveError};
pub use game::{Game, GameState};
pub use search::Searcher;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of pieces each player starts with
pub const PIECES_PER_PLAYER: usize = WIDTH * HEIGHT / 2;

// a window of four must fit in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
// both players get the same number of pieces
const_assert_eq!(WIDTH * HEIGHT % 2, 0);
