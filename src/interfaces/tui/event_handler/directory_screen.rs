//! Event handlers for the directory screen
//!
//! Handles: table navigation, sorting, refresh, copy, and the two inline
//! filter inputs

use std::time::Instant;

use ratatui::crossterm::event::KeyCode;

use crate::directory::SortField;
use crate::interfaces::tui::app::{App, CurrentScreen, FilterField};

/// Handle directory table input
pub fn handle_directory_screen(app: &mut App, key_code: KeyCode, now: Instant) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char('/') => app.focus_filter(FilterField::ShortUrl),
        KeyCode::Char('\\') => app.focus_filter(FilterField::Destination),
        KeyCode::Char('1') => app.select_sort(SortField::ShortUrl),
        KeyCode::Char('2') => app.select_sort(SortField::DestinationUrl),
        KeyCode::Char('3') => app.select_sort(SortField::Clicks),
        KeyCode::Char('r') | KeyCode::Char('R') => app.request_refresh(),
        KeyCode::Char('y') | KeyCode::Char('Y') => app.copy_selected_row(now),
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.open_overlay(CurrentScreen::Help);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.open_overlay(CurrentScreen::Exiting);
        }
        _ => {}
    }
    false
}

/// Handle inline filter input; every keystroke re-derives the table
pub fn handle_filter_input(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc | KeyCode::Enter => app.leave_filter(),
        KeyCode::Backspace => app.pop_filter_char(),
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => app.push_filter_char(c),
        _ => {}
    }
    false
}
