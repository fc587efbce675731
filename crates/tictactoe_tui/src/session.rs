//! Game orchestration: whose turn it is, and what a cell activation does.

use tictactoe_engine::{BoardEngine, Evaluation, Mark, Outcome, PlaceError};
use tracing::{debug, info, instrument};

/// What happened to a cell activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Mark placed; carries the board's new evaluation.
    Placed(Evaluation),
    /// Engine refused the placement. Turn unchanged.
    Rejected(PlaceError),
    /// Game already over; nothing was attempted.
    Ignored(Outcome),
}

/// One game session: a board engine plus the player to move.
///
/// The engine does not know about turns. The session places the current
/// player's mark and hands the turn over only when the placement succeeds.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: BoardEngine,
    current_player: Mark,
    first_player: Mark,
}

impl GameSession {
    /// Creates a session whose games open with `first_player`.
    #[instrument]
    pub fn new(first_player: Mark) -> Self {
        Self {
            engine: BoardEngine::new(),
            current_player: first_player,
            first_player,
        }
    }

    /// Player to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Read-only access to the engine.
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// Outcome and winning line of the current board.
    pub fn evaluation(&self) -> Evaluation {
        self.engine.evaluate()
    }

    /// Handles "cell `index` was activated by the current player".
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn activate(&mut self, index: usize) -> MoveResult {
        let before = self.engine.outcome();
        if before.is_terminal() {
            debug!(outcome = %before, "Game over, activation ignored");
            return MoveResult::Ignored(before);
        }

        if let Err(e) = self.engine.place_mark(index, self.current_player) {
            debug!(error = %e, "Move rejected");
            return MoveResult::Rejected(e);
        }

        let evaluation = self.engine.evaluate();
        debug!(board = %self.engine.board(), "Move applied");

        if evaluation.outcome().is_terminal() {
            info!(outcome = %evaluation.outcome(), "Game finished");
        } else {
            self.current_player = self.current_player.opponent();
        }

        MoveResult::Placed(evaluation)
    }

    /// Clears the board and gives the turn back to the opening player.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.engine.reset();
        self.current_player = self.first_player;
        info!(first_player = %self.first_player, "Game restarted");
    }
}
