//! 通用输入框组件
//!
//! 支持激活状态高亮、占位符和字符计数

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("URL", app.submission.input())
///     .active(true)
///     .placeholder("https://example.com/very/long/path")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    placeholder: Option<&'a str>,
    show_char_count: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            show_char_count: true,
        }
    }

    /// 设置激活状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置占位符（输入为空时以灰色显示在框内）
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn char_count(mut self, show: bool) -> Self {
        self.show_char_count = show;
        self
    }

    fn display_title(&self) -> String {
        if self.show_char_count && !self.value.is_empty() {
            format!("{} ({} chars)", self.title, self.value.chars().count())
        } else {
            self.title.to_string()
        }
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default().fg(colors::WARNING).bold()
        } else {
            Style::default().fg(colors::MUTED)
        }
    }

    fn content(&self) -> Line<'a> {
        if self.value.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            return Line::from(Span::styled(
                placeholder,
                Style::default().fg(colors::MUTED),
            ));
        }

        let mut spans = vec![Span::styled(self.value, Style::default().fg(Color::White))];
        if self.is_active {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(colors::WARNING)
                    .add_modifier(Modifier::RAPID_BLINK),
            ));
        }
        Line::from(spans)
    }

    /// 渲染输入框，区域高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.content()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .title_style(Style::default().fg(colors::PRIMARY))
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);
    }
}
