//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line input for a form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, theme: &Theme) {
    let border_style = if is_active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };
    let input_style = Style::default().bg(theme.input_bg).fg(theme.input_fg);

    let mut spans = Vec::new();
    if let Some(prefix) = field.prefix {
        spans.push(Span::styled(
            format!("{prefix} "),
            Style::default().fg(theme.placeholder),
        ));
    }

    if field.is_empty() {
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(theme.input_fg)));
        }
        spans.push(Span::styled(
            field.placeholder,
            Style::default().fg(theme.placeholder),
        ));
    } else {
        spans.push(Span::raw(field.as_text().to_string()));
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(theme.input_fg)));
        }
    }

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", field.label),
            Style::default().fg(theme.text).bg(theme.panel),
        ),
        Span::styled("* ", Style::default().fg(theme.muted).bg(theme.panel)),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(input_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the muted helper line under a field
pub fn draw_hint(frame: &mut Frame, area: Rect, hint: &str, theme: &Theme) {
    let paragraph = Paragraph::new(Span::styled(
        format!(" {hint}"),
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(paragraph, area);
}
