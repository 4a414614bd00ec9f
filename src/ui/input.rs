use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action the runtime must carry out after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Handled internally.
    None,
    /// Copy this link to the system clipboard.
    CopyLink(String),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::None;
    }

    if is_ctrl_char(key, 'y') {
        return match app.short_url() {
            Some(url) => InputAction::CopyLink(url.to_string()),
            None => InputAction::None,
        };
    }

    if is_ctrl_char(key, 'u') {
        app.field_mut().clear();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Esc => app.dismiss_toast(),
        KeyCode::Backspace => app.field_mut().backspace(),
        KeyCode::Delete => app.field_mut().delete(),
        KeyCode::Left => app.field_mut().move_left(),
        KeyCode::Right => app.field_mut().move_right(),
        KeyCode::Home => app.field_mut().move_home(),
        KeyCode::End => app.field_mut().move_end(),
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.field_mut().insert_char(ch);
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_edits_field() {
        let mut app = App::new(Duration::from_secs(6));
        for ch in "ab".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.field().text(), "a");
    }

    #[test]
    fn ctrl_chars_do_not_insert() {
        let mut app = App::new(Duration::from_secs(6));
        handle_key(&mut app, ctrl('x'));
        assert!(app.field().is_empty());
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(Duration::from_secs(6));
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn copy_without_link_does_nothing() {
        let mut app = App::new(Duration::from_secs(6));
        assert_eq!(handle_key(&mut app, ctrl('y')), InputAction::None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(Duration::from_secs(6));
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.field().is_empty());
    }
}
