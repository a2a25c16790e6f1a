use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, View};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from anywhere, login screen included
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Everything before sign-in goes to the login form
    if !app.auth.is_signed_in() {
        handle_login_input(app, key);
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If the media overlay is shown, handle overlay-specific keys
    if app.show_media_overlay {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                app.go_back();
            }
            // Allow browsing items while the overlay is open
            KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            _ => {}
        }
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // View switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),

        // Direct view access
        KeyCode::Char('1') => app.set_view(View::Dashboard),
        KeyCode::Char('2') => app.set_view(View::Budget),
        KeyCode::Char('3') => app.set_view(View::Scorecard),
        KeyCode::Char('4') => app.set_view(View::Gallery),

        // Gallery navigation
        KeyCode::Up | KeyCode::Char('k') => {
            if app.current_view == View::Gallery {
                app.select_prev();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.current_view == View::Gallery {
                app.select_next();
            }
        }

        // Open media detail overlay
        KeyCode::Enter => app.enter_media_detail(),

        // Go back (Esc and Backspace)
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Scenario toggle (Dashboard and Budget views)
        KeyCode::Char('o') => {
            if app.current_view == View::Dashboard || app.current_view == View::Budget {
                app.toggle_optimized();
            }
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Sign out
        KeyCode::Char('L') => app.log_out(),

        // Export
        KeyCode::Char('e') => {
            let export_path = std::path::PathBuf::from("orewatch_export.json");
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle key input on the login screen
fn handle_login_input(app: &mut App, key: KeyEvent) {
    // The staged authentication cannot be typed over
    if app.auth.is_pending() {
        return;
    }

    match key.code {
        // Submit the form
        KeyCode::Enter => app.auth.submit(),

        // Move between the user and password fields
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.auth.focus_next();
        }

        // Quit from the login screen
        KeyCode::Esc => app.quit(),

        KeyCode::Backspace => app.auth.input_backspace(),

        // Type characters
        KeyCode::Char(c) => app.auth.input_char(c),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthGate, Credentials};
    use crate::ui::Theme;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(
            AuthGate::with_delay(Credentials::default(), Duration::ZERO),
            Theme::dark(),
            None,
        )
    }

    #[test]
    fn test_login_typing_and_focus() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('a')));
        handle_key_event(&mut app, key(KeyCode::Tab));
        handle_key_event(&mut app, key(KeyCode::Char('b')));

        assert_eq!(app.auth.user_input, "a");
        assert_eq!(app.auth.password_input, "b");
    }

    #[test]
    fn test_wrong_login_stays_on_the_gate() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        handle_key_event(&mut app, key(KeyCode::Enter));

        assert!(!app.auth.is_signed_in());
        assert!(app.auth.notice.as_ref().unwrap().is_error);
    }

    #[tokio::test]
    async fn test_signed_in_keys_drive_navigation() {
        let mut app = App::new(AuthGate::pre_authorized(Credentials::default()), Theme::dark(), None);

        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.current_view, View::Budget);

        handle_key_event(&mut app, key(KeyCode::Char('o')));
        assert!(app.optimized);

        handle_key_event(&mut app, key(KeyCode::Char('4')));
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_media_index, 1);
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.show_media_overlay);
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.show_media_overlay);
    }

    #[tokio::test]
    async fn test_sign_out_key_returns_to_login() {
        let mut app = App::new(AuthGate::pre_authorized(Credentials::default()), Theme::dark(), None);
        handle_key_event(&mut app, key(KeyCode::Char('L')));
        assert!(!app.auth.is_signed_in());
        assert!(!app.sim_running());
    }
}
