//! Key bindings and cursor movement on the card grid.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One card left.
    Left,
    /// One card right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    Move(Direction),
    /// Flip the card under the cursor.
    Flip,
    /// Deal a new session.
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key press to a command.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Flip),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Move(Direction::Right)),
        _ => None,
    }
}

/// Moves the cursor over a grid of `count` cards laid out `columns` wide.
///
/// Movement stops at the edges; the last row may be short.
pub fn move_cursor(cursor: usize, direction: Direction, count: usize, columns: usize) -> usize {
    if count == 0 || columns == 0 {
        return 0;
    }
    let cursor = cursor.min(count - 1);
    let col = cursor % columns;

    let next = match direction {
        Direction::Left if col > 0 => cursor - 1,
        Direction::Right if col + 1 < columns => cursor + 1,
        Direction::Up => cursor.checked_sub(columns).unwrap_or(cursor),
        Direction::Down => cursor + columns,
        _ => cursor,
    };

    if next < count { next } else { cursor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        // 4 wide, 16 cards
        assert_eq!(move_cursor(0, Direction::Right, 16, 4), 1);
        assert_eq!(move_cursor(5, Direction::Up, 16, 4), 1);
        assert_eq!(move_cursor(5, Direction::Down, 16, 4), 9);
        assert_eq!(move_cursor(5, Direction::Left, 16, 4), 4);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(0, Direction::Left, 16, 4), 0);
        assert_eq!(move_cursor(3, Direction::Right, 16, 4), 3);
        assert_eq!(move_cursor(2, Direction::Up, 16, 4), 2);
        assert_eq!(move_cursor(14, Direction::Down, 16, 4), 14);
    }

    #[test]
    fn test_short_last_row() {
        // 10 cards, 4 wide: last row holds 8 and 9
        assert_eq!(move_cursor(6, Direction::Down, 10, 4), 6);
        assert_eq!(move_cursor(9, Direction::Right, 10, 4), 9);
        assert_eq!(move_cursor(5, Direction::Down, 10, 4), 9);
    }

    #[test]
    fn test_key_bindings() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(command_for_key(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(key(KeyCode::Char('r'))), Some(Command::Restart));
        assert_eq!(command_for_key(key(KeyCode::Enter)), Some(Command::Flip));
        assert_eq!(
            command_for_key(key(KeyCode::Left)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(command_for_key(key(KeyCode::Char('x'))), None);
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }
}
