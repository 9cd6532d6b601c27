//! Shorten screen: URL input, result area, copy button

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::widgets::InputField;
use crate::console::{CopyLabel, SubmissionState};
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;

fn copy_button(label: CopyLabel) -> Span<'static> {
    let color = match label {
        CopyLabel::Ready => colors::PRIMARY,
        CopyLabel::Copied => colors::SUCCESS,
        CopyLabel::Failed => colors::ERROR,
    };
    Span::styled(
        format!("[ {} ]", label.text()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn result_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.submission.state();
    let Some(text) = app.submission.result_text() else {
        let hint = if matches!(state, SubmissionState::Submitting) {
            "Shortening..."
        } else {
            "Enter a long URL and press Enter"
        };
        return vec![Line::from(Span::styled(
            hint,
            Style::default().fg(colors::MUTED),
        ))];
    };

    match state {
        SubmissionState::Success { .. } => vec![
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                copy_button(app.result_copy.label()),
                Span::styled("  Ctrl+Y", Style::default().fg(colors::MUTED)),
            ]),
        ],
        _ => vec![Line::from(Span::styled(
            text,
            Style::default().fg(colors::ERROR),
        ))],
    }
}

pub fn draw_shorten_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL input
            Constraint::Length(6), // Result
            Constraint::Min(0),
        ])
        .split(area);

    InputField::new("Long URL", app.submission.input())
        .active(app.current_screen == CurrentScreen::Shorten)
        .placeholder("https://example.com/some/long/path")
        .render(frame, chunks[0]);

    let result = Paragraph::new(result_lines(app))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Result")
                .title_style(Style::default().fg(colors::PRIMARY)),
        );
    frame.render_widget(result, chunks[1]);
}
