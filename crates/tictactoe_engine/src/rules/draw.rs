//! Draw detection.

use super::super::types::Board;

/// Checks if every cell holds a mark.
///
/// A full board with no winner is a tie.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}
