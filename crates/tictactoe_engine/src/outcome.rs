//! Game outcome and the combined evaluation result.

use super::line::WinningLine;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Classification of a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Outcome {
    /// No winner and at least one empty cell.
    #[default]
    Playing,
    /// Cross has three in a row.
    CrossWin,
    /// Nought has three in a row.
    NoughtWin,
    /// Board is full and nobody has a line.
    Tie,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Playing
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::CrossWin => Some(Mark::Cross),
            Outcome::NoughtWin => Some(Mark::Nought),
            Outcome::Playing | Outcome::Tie => None,
        }
    }

    /// Outcome for a win by `mark`.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::Cross => Outcome::CrossWin,
            Mark::Nought => Outcome::NoughtWin,
        }
    }
}

/// Outcome together with the line that produced it.
///
/// `winning_line` is `Some` exactly when the outcome is a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    outcome: Outcome,
    winning_line: Option<WinningLine>,
}

impl Evaluation {
    pub(crate) fn win(mark: Mark, line: WinningLine) -> Self {
        Self {
            outcome: Outcome::win_for(mark),
            winning_line: Some(line),
        }
    }

    pub(crate) fn undecided(outcome: Outcome) -> Self {
        debug_assert!(outcome.winner().is_none());
        Self {
            outcome,
            winning_line: None,
        }
    }

    /// The board's outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The winning line, present only for `CrossWin` and `NoughtWin`.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }
}
