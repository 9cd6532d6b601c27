//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - directory_screen: Directory table, filter inputs
//! - shorten_screen: URL input and result
//! - overlay_screens: Help, Exiting

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod directory_screen;
mod overlay_screens;
mod shorten_screen;

use directory_screen::*;
use overlay_screens::*;
use shorten_screen::*;

/// Handle keyboard input based on current screen. Returns true to exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    // Tab switches between the two main screens unless an overlay is open
    if key.code == KeyCode::Tab && !app.current_screen.is_overlay() {
        app.switch_main_screen();
        return false;
    }

    if key.code == KeyCode::F(1) && !app.current_screen.is_overlay() {
        app.open_overlay(CurrentScreen::Help);
        return false;
    }

    match app.current_screen {
        CurrentScreen::Shorten => handle_shorten_screen(app, key, now),
        CurrentScreen::Directory if app.filter_focus.is_some() => {
            handle_filter_input(app, key.code)
        }
        CurrentScreen::Directory => handle_directory_screen(app, key.code, now),
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
