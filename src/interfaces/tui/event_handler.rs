//! Event handling for TUI
//!
//! Handles keyboard events and delegates to the app operations

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen, Focus};

/// Handle a key press; returns `true` when the app should exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.current_screen {
        CurrentScreen::Help => {
            handle_help_screen(app, key.code);
            false
        }
        CurrentScreen::Main => match app.focus {
            Focus::List => handle_list(app, key.code),
            Focus::OriginalUrl | Focus::CustomAlias => {
                handle_form(app, key.code);
                false
            }
        },
    }
}

fn handle_help_screen(app: &mut App, key_code: KeyCode) {
    if matches!(key_code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
        app.current_screen = CurrentScreen::Main;
    }
}

fn handle_form(app: &mut App, key_code: KeyCode) {
    let Some(field) = app.focus.field() else {
        return;
    };

    match key_code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.focus = Focus::List,
        KeyCode::Backspace => app.form.pop_char(field),
        KeyCode::Char(c) => app.form.push_char(field, c),
        _ => {}
    }
}

fn handle_list(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('r') => app.retry(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus = Focus::OriginalUrl,
        KeyCode::Char('?') => app.current_screen = CurrentScreen::Help,
        _ => {}
    }
    false
}
