use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.refresh();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.dispatch_form(FormIntent::ClearField);
        return;
    }

    match key.code {
        KeyCode::Esc => app.back(),
        KeyCode::Enter => app.submit(),
        KeyCode::Up | KeyCode::BackTab => app.dispatch_form(FormIntent::MoveUp),
        KeyCode::Down | KeyCode::Tab => app.dispatch_form(FormIntent::MoveDown),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.dispatch_form(FormIntent::Input(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::UserRecord;
    use crate::ui::form::FieldKey;
    use std::time::Duration;

    fn editing() -> App {
        let mut app = App::new("42", Duration::from_secs(4));
        app.drain_commands();
        app.on_detail_loaded(
            1,
            UserRecord {
                id: "42".to_string(),
                fullname: "An".to_string(),
                ..Default::default()
            },
        );
        app
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key(app, KeyEvent::new(code, modifiers));
    }

    #[test]
    fn test_typing_goes_to_focused_input() {
        let mut app = editing();
        press(&mut app, KeyCode::Char('h'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('I'), KeyModifiers::SHIFT);
        assert_eq!(app.form().value(FieldKey::Fullname), Some("AnhI"));
    }

    #[test]
    fn test_ctrl_u_clears_input() {
        let mut app = editing();
        press(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(app.form().value(FieldKey::Fullname), Some(""));
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = editing();
        press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit());
    }

    #[test]
    fn test_esc_goes_back() {
        let mut app = editing();
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit());
    }

    #[test]
    fn test_enter_submits() {
        let mut app = editing();
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        // Most inputs are empty, so the submit is rejected with a marker
        assert_eq!(app.form().missing(), Some(FieldKey::Phone));
        assert!(app.drain_commands().is_empty());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = editing();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.form().value(FieldKey::Fullname), Some("An"));
    }
}
