//! Board evaluation rules.
//!
//! Pure functions over a [`Board`](crate::Board). The engine composes them;
//! they never mutate anything.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, find_line};

use super::outcome::{Evaluation, Outcome};
use super::types::Board;
use tracing::instrument;

/// Classifies the board: a win first, then a full board, otherwise still playing.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((mark, line)) = check_winner(board) {
        return Evaluation::win(mark, line);
    }

    if is_full(board) {
        Evaluation::undecided(Outcome::Tie)
    } else {
        Evaluation::undecided(Outcome::Playing)
    }
}
