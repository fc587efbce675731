//! Application state and command handling.

use crate::config::{Glyphs, TuiConfig};
use crate::input::Command;
use crate::session::{GameSession, MoveResult};
use crate::view::BoardView;
use tictactoe_engine::{Mark, Position};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    glyphs: Glyphs,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application from its configuration.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            session: GameSession::new(Mark::from(*config.first_player())),
            glyphs: config.glyphs().clone(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// What to draw.
    pub fn view(&self) -> BoardView {
        BoardView::from_session(&self.session, &self.glyphs)
    }

    /// Applies one user command.
    ///
    /// Illegal moves are dropped here: the board and turn stay as they were
    /// and nothing is reported to the user.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Activate(index) => self.activate(index),
            Command::ActivateCursor => self.activate(self.cursor.to_index()),
            Command::MoveCursor(step) => {
                self.cursor = self.cursor.step(step);
            }
            Command::Restart => {
                self.session.restart();
                self.cursor = Position::Center;
            }
            Command::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn activate(&mut self, index: usize) {
        if let Some(position) = Position::from_index(index) {
            self.cursor = position;
        }
        if let MoveResult::Placed(evaluation) = self.session.activate(index) {
            debug!(outcome = %evaluation.outcome(), "Move placed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Cell, Step};

    #[test]
    fn test_cursor_activation_places_mark() {
        let mut app = App::new(&TuiConfig::default());
        app.handle(Command::MoveCursor(Step::Up));
        app.handle(Command::ActivateCursor);
        assert_eq!(app.session().engine().cells()[1], Cell::Cross);
        assert_eq!(app.cursor(), Position::TopCenter);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&TuiConfig::default());
        assert!(!app.should_quit());
        app.handle(Command::Quit);
        assert!(app.should_quit());
    }
}
