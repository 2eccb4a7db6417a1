//! Page layout: two-column body and the key help bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into page content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (rows[0], rows[1])
}

/// Split page content into product column and form column
pub fn split_columns(area: Rect, product_percent: u16) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(product_percent),
            Constraint::Percentage(100 - product_percent),
        ])
        .split(area);

    (columns[0], columns[1])
}

/// Center a box of at most `width` x `height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the bottom help line
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::Gray);

    let bindings: &[(&str, &str)] = match app.state.current_view {
        _ if app.state.has_alert() => &[("Enter", "dismiss")],
        View::NotFound => &[("Esc", "quit")],
        // Submit is disabled until the pending submission is recorded
        View::Version1 | View::Version2 if !app.state.submit_phase.is_submit_enabled() => &[
            ("Tab/↑↓", "move"),
            ("Enter", "next"),
            ("Ctrl+U", "clear field"),
            ("Esc", "quit"),
        ],
        View::Version1 | View::Version2 => &[
            ("Tab/↑↓", "move"),
            ("Enter", "next/submit"),
            ("Ctrl+S", "submit"),
            ("Ctrl+U", "clear field"),
            ("Esc", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (idx, (key, action)) in bindings.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" · ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(content, Rect::new(0, 0, 100, 29));
        assert_eq!(status, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn test_split_columns() {
        let (left, right) = split_columns(Rect::new(0, 0, 100, 29), 45);
        assert_eq!(left.width, 45);
        assert_eq!(left.width + right.width, 100);
        assert_eq!(right.x, 45);
    }

    #[test]
    fn test_centered_clips() {
        let area = Rect::new(10, 10, 20, 5);
        assert_eq!(centered(area, 10, 3), Rect::new(15, 11, 10, 3));
        assert_eq!(centered(area, 50, 50), area);
    }
}
