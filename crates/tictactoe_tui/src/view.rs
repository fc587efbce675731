//! View model: everything the screen shows, derived from a session.

use crate::config::Glyphs;
use crate::session::GameSession;
use derive_getters::Getters;
use tictactoe_engine::{CELL_COUNT, Cell, Evaluation, Mark, Outcome};

/// Status line while the game is running.
pub fn turn_message(player: Mark) -> String {
    format!("Player Turn : {}", player)
}

/// Status line once the game has ended. `None` while still playing.
pub fn end_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::CrossWin => Some("X wins!"),
        Outcome::NoughtWin => Some("O wins!"),
        Outcome::Tie => Some("It's a tie!"),
        Outcome::Playing => None,
    }
}

/// Renderable snapshot of one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    /// One glyph per cell, row-major.
    glyphs: [String; CELL_COUNT],
    /// Turn or end-of-game message.
    status: String,
    /// Cells on the winning line.
    highlighted: [bool; CELL_COUNT],
    /// Outcome the view was built from.
    outcome: Outcome,
}

impl BoardView {
    /// Builds the view for a session.
    pub fn from_session(session: &GameSession, glyphs: &Glyphs) -> Self {
        Self::new(
            &session.engine().cells(),
            session.current_player(),
            session.evaluation(),
            glyphs,
        )
    }

    /// Builds the view from a cell snapshot and its evaluation.
    pub fn new(
        cells: &[Cell; CELL_COUNT],
        current_player: Mark,
        evaluation: Evaluation,
        glyphs: &Glyphs,
    ) -> Self {
        let outcome = evaluation.outcome();
        let status = end_message(outcome)
            .map(str::to_string)
            .unwrap_or_else(|| turn_message(current_player));

        let mut highlighted = [false; CELL_COUNT];
        if let Some(line) = evaluation.winning_line() {
            for index in line.indices() {
                highlighted[index] = true;
            }
        }

        Self {
            glyphs: cells.map(|cell| glyphs.for_cell(cell).to_string()),
            status,
            highlighted,
            outcome,
        }
    }

    /// Returns true if `index` is part of the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.get(index).copied().unwrap_or(false)
    }
}
