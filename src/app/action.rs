use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::list::Focus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Open,
    Back,
    ToggleTheme,
    Reload,
    Delete,
    FocusForm,
    LeaveForm,
    NextField,
    PrevField,
    FieldInput(char),
    FieldBackspace,
    ToggleStatus,
    Submit,
}

/// Which key map applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    Rows,
    Form { on_status: bool },
    Detail,
}

impl KeyMode {
    pub fn for_list(focus: Focus) -> Self {
        match focus {
            Focus::Rows => KeyMode::Rows,
            Focus::Form(field) => KeyMode::Form {
                on_status: field == crate::model::DraftField::Status,
            },
        }
    }
}

/// Map a key event to an action for the active screen.
pub fn map_key_to_action(key: KeyEvent, mode: KeyMode) -> Option<Action> {
    // Only handle key press events to avoid duplicate events
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        KeyMode::Rows => map_rows_key(key),
        KeyMode::Form { on_status } => map_form_key(key, on_status),
        KeyMode::Detail => map_detail_key(key),
    }
}

fn map_rows_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Open),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Delete | KeyCode::Char('d') => Some(Action::Delete),
        KeyCode::Char('a') | KeyCode::Tab => Some(Action::FocusForm),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::F(5) => Some(Action::Reload),
        _ => None,
    }
}

fn map_form_key(key: KeyEvent, on_status: bool) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::LeaveForm),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
        KeyCode::Backspace => Some(Action::FieldBackspace),
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right if on_status => {
            Some(Action::ToggleStatus)
        }
        KeyCode::Char(c) => Some(Action::FieldInput(c)),
        _ => None,
    }
}

fn map_detail_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_rows_keys() {
        assert_eq!(
            map_key_to_action(press(KeyCode::Char('d')), KeyMode::Rows),
            Some(Action::Delete)
        );
        assert_eq!(map_key_to_action(press(KeyCode::Enter), KeyMode::Rows), Some(Action::Open));
        assert_eq!(
            map_key_to_action(press(KeyCode::Char('t')), KeyMode::Rows),
            Some(Action::ToggleTheme)
        );
        assert_eq!(map_key_to_action(press(KeyCode::Char('z')), KeyMode::Rows), None);
    }

    #[test]
    fn test_form_keys_type_letters() {
        let mode = KeyMode::Form { on_status: false };
        assert_eq!(
            map_key_to_action(press(KeyCode::Char('q')), mode),
            Some(Action::FieldInput('q'))
        );
        assert_eq!(
            map_key_to_action(press(KeyCode::Char(' ')), mode),
            Some(Action::FieldInput(' '))
        );
        assert_eq!(map_key_to_action(press(KeyCode::Esc), mode), Some(Action::LeaveForm));
        assert_eq!(map_key_to_action(press(KeyCode::Enter), mode), Some(Action::Submit));
    }

    #[test]
    fn test_space_toggles_status_field() {
        let mode = KeyMode::Form { on_status: true };
        assert_eq!(
            map_key_to_action(press(KeyCode::Char(' ')), mode),
            Some(Action::ToggleStatus)
        );
        assert_eq!(map_key_to_action(press(KeyCode::Right), mode), Some(Action::ToggleStatus));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [KeyMode::Rows, KeyMode::Form { on_status: false }, KeyMode::Detail] {
            assert_eq!(map_key_to_action(key, mode), Some(Action::Quit));
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key_to_action(key, KeyMode::Rows), None);
    }

    #[test]
    fn test_detail_back() {
        assert_eq!(map_key_to_action(press(KeyCode::Esc), KeyMode::Detail), Some(Action::Back));
        assert_eq!(
            map_key_to_action(press(KeyCode::Char('b')), KeyMode::Detail),
            Some(Action::Back)
        );
    }
}
