use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use super::widgets::InputField;
use crate::directory::{DirectoryView, HeaderView};
use crate::interfaces::tui::app::{App, FilterField};
use crate::interfaces::tui::constants::colors;

/// Format a header cell with its sort indicator
fn format_header(header: &HeaderView) -> Span<'static> {
    let style = if header.active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(header.title(), style)
}

fn draw_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (field, chunk, key) in [
        (FilterField::ShortUrl, chunks[0], "press /"),
        (FilterField::Destination, chunks[1], "press \\"),
    ] {
        InputField::new(field.title(), app.filter_value(field))
            .active(app.filter_focus == Some(field))
            .placeholder(key)
            .char_count(false)
            .render(frame, chunk);
    }
}

fn draw_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let (headline, hint) = if app.fetch.is_loading() && app.store.is_empty() {
        ("Loading links...", "")
    } else if app.store.is_empty() {
        ("No short links found", "Press [r] to reload")
    } else {
        ("No links match the current filters", "Press [/] or [\\] to edit the filters")
    };

    let mut text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![Span::styled(
            headline,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )]),
    ];
    if !hint.is_empty() {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let empty = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Short Links")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(empty, area);
}

fn table_title(app: &App, view: &DirectoryView) -> String {
    let mut title_parts = vec![format!("Short Links ({})", view.rows.len())];
    if !app.store.filter().is_empty() {
        title_parts.push(format!("{} total", app.store.len()));
    }
    if let Some(header) = view.active_header() {
        title_parts.push(format!("Sort: {}", header.title()));
    }
    title_parts.join(" | ")
}

fn draw_table(frame: &mut Frame, app: &mut App, view: &DirectoryView, area: Rect) {
    let total = view.rows.len();

    // 计算可见窗口（border 2行 + header 1行 + header margin 1行 = 4行开销）
    let visible_height = (area.height as usize).saturating_sub(4);
    app.last_visible_height = visible_height.max(1);
    app.adjust_scroll_offset();

    let offset = app.scroll_offset.min(total.saturating_sub(1));
    app.scroll_offset = offset;
    let end = (offset + visible_height).min(total);

    let header = Row::new(view.headers.iter().map(format_header).collect::<Vec<_>>())
        .bottom_margin(1);

    // 虚拟渲染：只构建可见行的 Row
    let rows: Vec<Row> = view.rows[offset..end]
        .iter()
        .map(|row| {
            Row::new(vec![
                Span::styled(
                    row.short_url.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(row.destination.clone(), Style::default().fg(Color::Blue)),
                Span::styled(row.clicks.clone(), Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Min(20),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(table_title(app, view))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    // 虚拟 TableState：selected 调整为相对于可见窗口的偏移
    let mut virtual_state = TableState::default();
    if app.selected_index >= offset && app.selected_index < end {
        virtual_state.select(Some(app.selected_index - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}

/// Full destination and copy state of the highlighted row
fn draw_detail_line(frame: &mut Frame, app: &App, view: &DirectoryView, area: Rect) {
    let line = match (app.fetch.error_message(), view.rows.get(app.selected_index)) {
        (Some(message), _) => Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors::ERROR).bold(),
        )),
        (None, Some(row)) => Line::from(vec![
            Span::styled(row.link_target.clone(), Style::default().fg(Color::Cyan)),
            Span::styled(" → ", Style::default().fg(Color::DarkGray)),
            Span::styled(row.destination_full.clone(), Style::default().fg(Color::Blue)),
            Span::styled(
                format!("  [{}]", app.row_copy.label().text()),
                Style::default().fg(colors::SUCCESS),
            ),
        ]),
        (None, None) => Line::from(""),
    };

    let detail = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(detail, area);
}

pub fn draw_directory_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filters
            Constraint::Min(6),    // Table
            Constraint::Length(3), // Detail
        ])
        .split(area);

    draw_filter_bar(frame, app, chunks[0]);

    let view = app.directory_view();
    if view.rows.is_empty() {
        draw_empty_state(frame, app, chunks[1]);
    } else {
        draw_table(frame, app, &view, chunks[1]);
    }
    draw_detail_line(frame, app, &view, chunks[2]);
}
