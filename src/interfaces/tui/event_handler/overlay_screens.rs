//! Event handlers for overlay screens
//!
//! Handles: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::App;

/// Handle help screen input
pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc
        | KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Char('?')
        | KeyCode::F(1) => app.close_overlay(),
        _ => {}
    }
    false
}

/// Handle exit confirmation input
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_overlay(),
        _ => {}
    }
    false
}
