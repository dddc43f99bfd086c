//! Abstract key events fed into a session

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A discrete input event, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A character key; only ASCII letters have any effect
    Letter(char),
    /// Delete the last letter of the active row
    Backspace,
    /// Submit the active row
    Enter,
    /// Anything else (arrows, function keys, releases, chords)
    Other,
}

impl From<KeyEvent> for InputEvent {
    fn from(key: KeyEvent) -> Self {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Self::Other;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Self::Other;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Self::Letter(c),
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Enter => Self::Enter,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_letters_in_either_case() {
        assert_eq!(InputEvent::from(press(KeyCode::Char('a'))), InputEvent::Letter('a'));
        assert_eq!(InputEvent::from(press(KeyCode::Char('Z'))), InputEvent::Letter('Z'));
        let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(InputEvent::from(shifted), InputEvent::Letter('Q'));
    }

    #[test]
    fn maps_backspace_and_enter() {
        assert_eq!(InputEvent::from(press(KeyCode::Backspace)), InputEvent::Backspace);
        assert_eq!(InputEvent::from(press(KeyCode::Enter)), InputEvent::Enter);
    }

    #[test]
    fn ignores_non_letters() {
        for code in [
            KeyCode::Char('1'),
            KeyCode::Char(' '),
            KeyCode::Char('é'),
            KeyCode::Tab,
            KeyCode::Left,
            KeyCode::F(5),
        ] {
            assert_eq!(InputEvent::from(press(code)), InputEvent::Other, "{code:?}");
        }
    }

    #[test]
    fn ignores_chords_and_releases() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputEvent::from(ctrl_c), InputEvent::Other);

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(InputEvent::from(release), InputEvent::Other);
    }
}
