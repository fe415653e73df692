use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    InputChar(char),
    Backspace,
    ClearInput,
    Submit,
    StopReveal,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    None,
}

pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearInput,

        // Every other printable char goes to the validator, which rejects non-letters
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InputChar(c),
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Esc, _) => Action::StopReveal,

        (KeyCode::Up, _) => Action::ScrollUp,
        (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::PageUp, _) => Action::ScrollPageUp,
        (KeyCode::PageDown, _) => Action::ScrollPageDown,

        _ => Action::None,
    }
}

pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollUp => Action::ScrollUp,
        MouseEventKind::ScrollDown => Action::ScrollDown,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t'), KeyModifiers::NONE)),
            Action::InputChar('t')
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('T'), KeyModifiers::SHIFT)),
            Action::InputChar('T')
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3'), KeyModifiers::NONE)),
            Action::InputChar('3')
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Action::Backspace
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Action::ClearInput
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter, KeyModifiers::NONE)), Action::Submit);
        assert_eq!(handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE)), Action::StopReveal);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x'), KeyModifiers::ALT)),
            Action::None
        );
    }

    #[test]
    fn test_scroll_keys_and_wheel() {
        assert_eq!(
            handle_key_event(key(KeyCode::PageDown, KeyModifiers::NONE)),
            Action::ScrollPageDown
        );

        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(wheel), Action::ScrollDown);
    }
}
