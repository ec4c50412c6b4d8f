use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns Ok(true) when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match (app.screen, app.ui_mode) {
        (Screen::Setup, _) => handle_setup(app, key),
        (Screen::Study, UiMode::Normal) => handle_study(app, key),
        (Screen::Study, UiMode::ConfirmGiveUp) => handle_confirm_give_up(app, key),
        (Screen::History, _) => handle_history(app, key),
    }
}

/// Setup screen: the form fields are always in edit mode, so plain
/// characters go into the active field and commands sit on non-text keys.
fn handle_setup(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // View history
        KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.open_history();
            Ok(false)
        }

        // Start the session
        KeyCode::Enter => {
            app.start_session();
            Ok(false)
        }

        // Field switching
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            app.form_toggle_field();
            Ok(false)
        }

        // Text entry
        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.form_add_char(c);
            Ok(false)
        }

        // Quit
        KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Study screen while the timer runs
fn handle_study(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Complete the session (allowed at any elapsed time)
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => {
            app.complete_session();
            Ok(false)
        }

        // Ask for give-up confirmation
        KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Esc => {
            app.request_give_up();
            Ok(false)
        }

        // Quit, discarding the running session
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Give-up confirmation dialog
fn handle_confirm_give_up(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_give_up();
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_give_up();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// History screen
fn handle_history(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_history_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_history_down();
            Ok(false)
        }
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Enter => {
            app.close_history();
            Ok(false)
        }
        KeyCode::Char('q') => Ok(true),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::HistoryStore;

    fn create_test_app() -> (AppState, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let history = HistoryStore::load(temp_dir.path().join("history.json"));
        (AppState::new(history), temp_dir)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_fills_form_fields() {
        let (mut app, _dir) = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('A'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('b'))).unwrap();
        handle_key(&mut app, press(KeyCode::Tab)).unwrap();
        handle_key(&mut app, press(KeyCode::Char('2'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('5'))).unwrap();

        assert_eq!(app.form.goal, "Ab");
        assert_eq!(app.form.target_minutes, "25");
    }

    #[test]
    fn test_enter_starts_session_from_setup() {
        let (mut app, _dir) = create_test_app();
        app.configure("Goal", "25");

        let quit = handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert!(!quit);
        assert_eq!(app.screen, Screen::Study);
    }

    #[test]
    fn test_enter_with_invalid_form_stays_in_setup() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.warning.is_some());
    }

    #[test]
    fn test_give_up_flow_via_keys() {
        let (mut app, _dir) = create_test_app();
        app.configure("Goal", "25");
        app.start_session();

        handle_key(&mut app, press(KeyCode::Char('g'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::ConfirmGiveUp);

        handle_key(&mut app, press(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.screen, Screen::Study);

        handle_key(&mut app, press(KeyCode::Char('g'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_complete_via_key_appends_history() {
        let (mut app, _dir) = create_test_app();
        app.configure("Goal", "25");
        app.start_session();

        handle_key(&mut app, press(KeyCode::Char('c'))).unwrap();
        assert_eq!(app.screen, Screen::Setup);
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_ctrl_h_opens_history() {
        let (mut app, _dir) = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL);
        handle_key(&mut app, key).unwrap();
        assert_eq!(app.screen, Screen::History);

        handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert_eq!(app.screen, Screen::Setup);
    }

    #[test]
    fn test_plain_h_is_text_not_command() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('h'))).unwrap();
        assert_eq!(app.screen, Screen::Setup);
        assert_eq!(app.form.goal, "h");
    }

    #[test]
    fn test_quit_from_study_discards_session() {
        let (mut app, _dir) = create_test_app();
        app.configure("Goal", "25");
        app.start_session();

        let quit = handle_key(&mut app, press(KeyCode::Char('q'))).unwrap();
        assert!(quit);
        assert!(app.history.is_empty());
    }
}
