//! Keyboard mapping for the explorer.

use crossterm::event::{KeyCode, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the explorer.
    Quit,
    /// Move the focus cursor up one row.
    FocusUp,
    /// Move the focus cursor down one row.
    FocusDown,
    /// Toggle expansion of the focused stage.
    ToggleFocused,
    /// Toggle expansion of the stage with this id.
    Select(u32),
    /// Not bound to anything.
    Ignore,
}

pub fn handle_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Up | KeyCode::Char('k') => KeyAction::FocusUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::FocusDown,

        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::ToggleFocused,

        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => c
            .to_digit(10)
            .map(KeyAction::Select)
            .unwrap_or(KeyAction::Ignore),

        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert_eq!(
            handle_key_event(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit
        );
        assert_eq!(
            handle_key_event(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Quit
        );
        assert_eq!(
            handle_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            handle_key_event(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::FocusUp
        );
        assert_eq!(
            handle_key_event(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::FocusDown
        );
    }

    #[test]
    fn digit_jumps_to_stage() {
        assert_eq!(
            handle_key_event(KeyCode::Char('3'), KeyModifiers::NONE),
            KeyAction::Select(3)
        );
        // '0' is not a stage id
        assert_eq!(
            handle_key_event(KeyCode::Char('0'), KeyModifiers::NONE),
            KeyAction::Ignore
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(
            handle_key_event(KeyCode::Char('x'), KeyModifiers::NONE),
            KeyAction::Ignore
        );
        assert_eq!(
            handle_key_event(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::Ignore
        );
    }
}
