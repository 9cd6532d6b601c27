use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};

fn tab_span(label: &'static str, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(Color::DarkGray))
    }
}

/// Draw title bar with version, screen tabs and counts
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let derived = app.display_count();
    let total = app.store.len();

    let title_text = vec![Line::from(vec![
        Span::styled("linkdesk", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        tab_span("Shorten", app.main_screen == CurrentScreen::Shorten),
        tab_span("Directory", app.main_screen == CurrentScreen::Directory),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            if derived == total {
                format!("Links: {} ", total)
            } else {
                format!("Links: {}/{} ", derived, total)
            },
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if app.fetch.is_loading() {
        (
            "Loading links...".to_string(),
            Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
        )
    } else if app.submission.is_submitting() {
        (
            "Shortening...".to_string(),
            Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
        )
    } else if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Shorten => vec![
            ("Enter", "Shorten", Color::Green),
            ("Ctrl+Y", app.result_copy.label().text(), Color::Green),
            ("Tab", "Directory", Color::Cyan),
            ("F1", "Help", Color::Blue),
            ("Esc", "Quit", Color::Magenta),
        ],
        CurrentScreen::Directory if app.filter_focus.is_some() => vec![
            ("Type", "Filter", Color::Cyan),
            ("Enter/Esc", "Done", Color::Green),
        ],
        CurrentScreen::Directory => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("/ \\", "Filter", Color::Cyan),
            ("1-3", "Sort", Color::Yellow),
            ("r", "Reload", Color::Green),
            ("y", app.row_copy.label().text(), Color::Green),
            ("Tab", "Shorten", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
