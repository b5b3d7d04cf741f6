//! Key mapping from terminal events to engine actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an engine action.
///
/// Gravity is never produced here; see [`crate::GravityClock`].
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('\n') => Some(Action::Start),

        // Movement
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Down => Some(Action::Down),

        // Rotation
        KeyCode::Up | KeyCode::Char('z') | KeyCode::Char('Z') => Some(Action::Rotate),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::Pause),
        KeyCode::Esc => Some(Action::Terminate),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key asks for a new game (honored by the host after game over).
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
