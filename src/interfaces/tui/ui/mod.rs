// UI submodules
mod common;
mod directory_screen;
mod exiting;
mod help;
mod shorten_screen;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use directory_screen::draw_directory_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use shorten_screen::draw_shorten_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // Overlays draw on top of the screen they were opened from
    match app.main_screen {
        CurrentScreen::Directory => draw_directory_screen(frame, app, main_chunks[1]),
        _ => draw_shorten_screen(frame, app, main_chunks[1]),
    }
    match app.current_screen {
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, main_chunks[1]),
        CurrentScreen::Shorten | CurrentScreen::Directory => {}
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
