//! Key bindings.

use crossterm::event::KeyCode;
use tictactoe_engine::Step;

/// A user command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Activate the cell with this index (0-8).
    Activate(usize),
    /// Activate the cell under the cursor.
    ActivateCursor,
    /// Move the cursor.
    MoveCursor(Step),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to a command. Digits 1-9 address cells in reading order.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Command::Activate(digit as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::ActivateCursor),
        KeyCode::Up => Some(Command::MoveCursor(Step::Up)),
        KeyCode::Down => Some(Command::MoveCursor(Step::Down)),
        KeyCode::Left => Some(Command::MoveCursor(Step::Left)),
        KeyCode::Right => Some(Command::MoveCursor(Step::Right)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(command_for(KeyCode::Char('1')), Some(Command::Activate(0)));
        assert_eq!(command_for(KeyCode::Char('5')), Some(Command::Activate(4)));
        assert_eq!(command_for(KeyCode::Char('9')), Some(Command::Activate(8)));
        assert_eq!(command_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for(KeyCode::Char('r')), Some(Command::Restart));
        assert_eq!(command_for(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for(KeyCode::Enter), Some(Command::ActivateCursor));
        assert_eq!(
            command_for(KeyCode::Left),
            Some(Command::MoveCursor(Step::Left))
        );
        assert_eq!(command_for(KeyCode::Tab), None);
    }
}
