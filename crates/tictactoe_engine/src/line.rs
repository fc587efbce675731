//! The eight lines that can win a game.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Three cell indices forming a row, column or diagonal.
///
/// Indices follow the line's natural order: rows left to right, columns top
/// to bottom, diagonals starting from the top corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// Every line in scan order: rows, then columns, then diagonals.
    pub const ALL: [WinningLine; 8] = [
        // Rows
        WinningLine([0, 1, 2]),
        WinningLine([3, 4, 5]),
        WinningLine([6, 7, 8]),
        // Columns
        WinningLine([0, 3, 6]),
        WinningLine([1, 4, 7]),
        WinningLine([2, 5, 8]),
        // Diagonals
        WinningLine([0, 4, 8]),
        WinningLine([2, 4, 6]),
    ];

    /// The three cell indices.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// The three positions.
    pub fn positions(&self) -> [Position; 3] {
        self.0.map(|index| Position::ALL[index])
    }

    /// Returns true if `index` is part of this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({}, {}, {})", a, b, c)
    }
}
