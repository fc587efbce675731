//! Tic-tac-toe board engine.
//!
//! A pure, synchronous 3x3 board: placement legality, win detection across
//! rows, columns and diagonals, and terminal-state classification.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{BoardEngine, Mark, Outcome};
//!
//! let mut engine = BoardEngine::new();
//! for index in [0, 1, 2] {
//!     engine.place_mark(index, Mark::Cross).unwrap();
//! }
//!
//! assert_eq!(engine.outcome(), Outcome::CrossWin);
//! assert_eq!(engine.winning_line().unwrap().indices(), [0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod line;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use engine::BoardEngine;
pub use error::{EngineError, PlaceError};
pub use line::WinningLine;
pub use outcome::{Evaluation, Outcome};
pub use position::{Position, Step};
pub use types::{Board, CELL_COUNT, Cell, Mark, SIDE};
