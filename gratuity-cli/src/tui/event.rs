//! Event handling for keyboard input using crossterm.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tui_input::backend::crossterm::EventHandler;

use crate::tui::app::{App, Focus, Screen};

/// Poll for events and handle them.
/// Returns Ok(true) if the app should quit.
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // Poll for events with a small timeout
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        // Clear any existing message on key press
        app.message = None;

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        match app.screen {
            Screen::Main => handle_main_screen(app, key),
            Screen::Help => handle_help(app, key.code),
        }

        if !app.running {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Handle the calculator screen
fn handle_main_screen(app: &mut App, key: event::KeyEvent) {
    match key.code {
        KeyCode::Esc => app.running = false,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::F(1) => app.screen = Screen::Help,
        KeyCode::F(2) => app.cycle_locale(),
        KeyCode::Enter => {
            match app.focus {
                // Enter on a text field advances, like Tab
                Focus::Bill | Focus::Percent => app.focus_next(),
                Focus::RoundUp => app.toggle_round_up(),
            }
        }
        _ => match app.focus {
            Focus::RoundUp => handle_toggle_keys(app, key.code),
            Focus::Bill | Focus::Percent => {
                // Forward everything else to the focused text field and
                // re-derive the tip immediately
                if let Some(input) = app.active_input() {
                    input.handle_event(&Event::Key(key));
                }
                app.recompute();
            }
        },
    }
}

/// Keys available while the round-up toggle has focus
fn handle_toggle_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(' ') => app.toggle_round_up(),
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.screen = Screen::Help,
        KeyCode::Char('l') => app.cycle_locale(),
        _ => {}
    }
}

/// Handle help screen
fn handle_help(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            app.screen = Screen::Main;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gratuity::prelude::*;

    fn app() -> App {
        App::new(TipConfig::default())
    }

    #[test]
    fn test_toggle_keys() {
        let mut app = app();
        app.focus = Focus::RoundUp;

        handle_toggle_keys(&mut app, KeyCode::Char(' '));
        assert!(app.round_up);
        handle_toggle_keys(&mut app, KeyCode::Char(' '));
        assert!(!app.round_up);

        handle_toggle_keys(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_help_screen_closes() {
        let mut app = app();
        app.screen = Screen::Help;
        handle_help(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Main);
    }
}
