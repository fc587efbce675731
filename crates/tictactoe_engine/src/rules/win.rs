//! Win detection.

use super::super::line::WinningLine;
use super::super::types::{Board, Cell, Mark};

/// Finds the first line, in scan order, held entirely by `mark`.
pub fn find_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    let target = Cell::from(mark);
    WinningLine::ALL
        .into_iter()
        .find(|line| line.indices().iter().all(|&i| board.get(i) == Some(target)))
}

/// Returns the winner and its line.
///
/// Cross is checked before Nought. Legal alternating play never produces
/// two winners, but a hand-built board can; Cross then takes precedence.
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    [Mark::Cross, Mark::Nought]
        .into_iter()
        .find_map(|mark| find_line(board, mark).map(|line| (mark, line)))
}
