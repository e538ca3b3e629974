//! Key bindings for the interactive screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pass::CharClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    ClickPassword,
    Lengthen,
    Shorten,
    Toggle(CharClass),
    Save,
    Help,
    Quit,
    Ignore,
}

pub fn action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('s') => Action::Save,
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('p') | KeyCode::Char(' ') => Action::ClickPassword,
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Action::Lengthen,
        KeyCode::Left | KeyCode::Char('-') => Action::Shorten,
        KeyCode::Char('u') => Action::Toggle(CharClass::Upper),
        KeyCode::Char('l') => Action::Toggle(CharClass::Lower),
        KeyCode::Char('d') => Action::Toggle(CharClass::Digit),
        KeyCode::Char('s') => Action::Toggle(CharClass::Symbol),
        KeyCode::Char('w') => Action::Save,
        KeyCode::Char('?') | KeyCode::Char('h') => Action::Help,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::screen::hotkey;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn class_hotkeys_match_screen_labels() {
        for class in CharClass::ALL {
            assert_eq!(action(key(KeyCode::Char(hotkey(class)))), Action::Toggle(class));
        }
    }

    #[test]
    fn ctrl_c_quits_instead_of_copying() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action(ctrl_c), Action::Quit);
        assert_eq!(action(key(KeyCode::Char('c'))), Action::Copy);
    }

    #[test]
    fn both_copy_surfaces_are_bound() {
        assert_eq!(action(key(KeyCode::Char('p'))), Action::ClickPassword);
        assert_eq!(action(key(KeyCode::Char(' '))), Action::ClickPassword);
        assert_eq!(action(key(KeyCode::Enter)), Action::Generate);
        assert_eq!(action(key(KeyCode::F(5))), Action::Ignore);
    }
}
