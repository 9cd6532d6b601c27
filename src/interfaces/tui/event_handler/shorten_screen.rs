//! Event handlers for the shorten screen

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Every printable key goes into the URL input, so shortcuts here need Ctrl
pub fn handle_shorten_screen(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('y') => app.copy_result(now),
            KeyCode::Char('u') => app.submission.set_input(""),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Enter => app.request_submit(),
        KeyCode::Backspace => app.submission.pop_char(),
        KeyCode::Esc => app.open_overlay(CurrentScreen::Exiting),
        KeyCode::Char(c) => app.submission.push_char(c),
        _ => {}
    }
    false
}
