//! The board engine: sole owner of the grid.

use super::error::{EngineError, PlaceError};
use super::line::WinningLine;
use super::outcome::{Evaluation, Outcome};
use super::rules;
use super::types::{Board, CELL_COUNT, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe board engine.
///
/// Enforces placement legality and classifies the board. It does not track
/// whose turn it is; alternating marks is the caller's job.
///
/// Outcome and winning line are recomputed from the cells on every query,
/// so queries may be made in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEngine {
    board: Board,
}

impl BoardEngine {
    /// Creates an engine with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine holding exactly `cells`.
    ///
    /// No legality checks are made, so positions unreachable in real play
    /// (for example two winners) can be built.
    #[instrument]
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self {
            board: Board::from_cells(cells),
        }
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::OutOfRange`] if `index` is not in 0-8.
    /// - [`PlaceError::CellOccupied`] if the cell already holds a mark.
    ///
    /// On error the board is unchanged.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        let cell = self
            .board
            .get(index)
            .ok_or(PlaceError::OutOfRange { index })?;

        if let Some(occupant) = cell.mark() {
            return Err(PlaceError::CellOccupied { index, occupant });
        }

        self.board.set(index, Cell::from(mark));
        debug!(index, %mark, "Mark placed");
        Ok(())
    }

    /// Places a cross at `index`. See [`place_mark`](Self::place_mark).
    pub fn place_cross(&mut self, index: usize) -> Result<(), PlaceError> {
        self.place_mark(index, Mark::Cross)
    }

    /// Places a nought at `index`. See [`place_mark`](Self::place_mark).
    pub fn place_nought(&mut self, index: usize) -> Result<(), PlaceError> {
        self.place_mark(index, Mark::Nought)
    }

    /// Snapshot of the cells. Mutating it does not touch the engine.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        *self.board.cells()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Outcome of the current board.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Outcome {
        self.evaluate().outcome()
    }

    /// Line that won the game.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoWinningLine`] when the outcome is `Playing` or `Tie`.
    #[instrument(skip(self))]
    pub fn winning_line(&self) -> Result<WinningLine, EngineError> {
        let evaluation = self.evaluate();
        evaluation
            .winning_line()
            .ok_or(EngineError::NoWinningLine {
                outcome: evaluation.outcome(),
            })
    }

    /// Outcome and winning line, computed together.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Evaluation {
        let evaluation = rules::evaluate(&self.board);
        debug!(outcome = %evaluation.outcome(), "Board evaluated");
        evaluation
    }

    /// Indices of empty cells, ascending.
    pub fn open_cells(&self) -> Vec<usize> {
        self.board.empty_indices()
    }

    /// Clears the board for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        debug!("Board reset");
    }
}
