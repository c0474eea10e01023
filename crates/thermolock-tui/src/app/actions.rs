//! Key bindings

use crossterm::event::KeyCode;
use thermolock_core::Digit;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleLock,
    Digit(Digit),
    Clear,
    Dismiss,
    TogglePermission,
    ToggleRequiresCode,
    Quit,
}

/// Map a key to an action; the keypad captures input while it is open
pub fn action_for_key(key: KeyCode, keypad_open: bool) -> Option<Action> {
    if keypad_open {
        return match key {
            KeyCode::Char(c) if c.is_ascii_digit() => Digit::try_from(c).ok().map(Action::Digit),
            KeyCode::Char('c') | KeyCode::Backspace | KeyCode::Delete => Some(Action::Clear),
            KeyCode::Esc => Some(Action::Dismiss),
            _ => None,
        };
    }

    match key {
        KeyCode::Char('l') | KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleLock),
        KeyCode::Char('p') => Some(Action::TogglePermission),
        KeyCode::Char('r') => Some(Action::ToggleRequiresCode),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Footer hints for the current mode
pub fn hints(keypad_open: bool) -> &'static [(&'static str, &'static str)] {
    if keypad_open {
        &[("0-9", "Digit"), ("Backspace", "Clear"), ("Esc", "Close")]
    } else {
        &[
            ("L", "Lock/Unlock"),
            ("R", "Code required"),
            ("P", "Permission"),
            ("Q", "Quit"),
        ]
    }
}
