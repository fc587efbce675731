//! Engine error types.

use super::outcome::Outcome;
use super::types::Mark;
use derive_more::{Display, Error};

/// Reasons a placement is refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Index is not in 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// Target cell already holds a mark.
    #[display("Cell {} is already occupied by {}", index, occupant)]
    CellOccupied {
        /// The rejected index.
        index: usize,
        /// Mark already in the cell.
        occupant: Mark,
    },
}

/// Errors from engine queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A winning line was requested for a board nobody has won.
    #[display("No winning line: outcome is {}", outcome)]
    NoWinningLine {
        /// Outcome at the time of the request.
        outcome: Outcome,
    },
}
