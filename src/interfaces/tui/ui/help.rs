use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn shortcut(keys: &'static str, description: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        Line::from(""),
        section("GENERAL"),
        shortcut("Tab", "Switch Shorten / Directory", Color::Cyan),
        shortcut("F1, ?", "Show this help", Color::Cyan),
        shortcut("Ctrl+C", "Quit immediately", Color::Magenta),
        Line::from(""),
        section("SHORTEN"),
        shortcut("(type)", "Edit the URL", Color::Cyan),
        shortcut("Enter", "Create short link", Color::Green),
        shortcut("Ctrl+Y", "Copy the short URL", Color::Green),
        shortcut("Ctrl+U", "Clear the input", Color::Yellow),
        shortcut("Esc", "Quit", Color::Magenta),
        Line::from(""),
        section("DIRECTORY"),
        shortcut("Up/Down, j/k", "Navigate list", Color::Cyan),
        shortcut("Home/End, g/G", "Jump to top / bottom", Color::Cyan),
        shortcut("PageUp/PageDown", "Scroll 10 items", Color::Cyan),
        shortcut("1 / 2 / 3", "Sort by short URL / destination / clicks", Color::Cyan),
        shortcut("", "Press again to reverse the order", Color::Cyan),
        shortcut("r", "Reload links from the server", Color::Green),
        shortcut("y", "Copy selected short URL", Color::Green),
        shortcut("q, Esc", "Quit", Color::Magenta),
        Line::from(""),
        section("FILTERS"),
        shortcut("/", "Filter by short URL", Color::Cyan),
        shortcut("\\", "Filter by destination URL", Color::Cyan),
        shortcut("Enter, Esc", "Leave the filter (text is kept)", Color::Red),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Filters match case-insensitive substrings; empty filters match everything.",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner_area);
}
