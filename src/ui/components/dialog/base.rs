//! Modal box drawn over the page

use crate::ui::layout::centered;
use ratatui::{
    layout::{Constraint, Layout, Margin},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

/// Blank columns between the border and the message
const SIDE_MARGIN: u16 = 2;

pub struct DialogConfig<'a> {
    /// Shown in the top border
    pub title: &'a str,
    pub accent: Color,
    pub message: &'a str,
    /// Right-aligned footer line
    pub hint: Option<Line<'a>>,
    pub width: u16,
}

/// Render `config` as a rounded box centered on the frame
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let text_width = config.width.saturating_sub(2 + 2 * SIDE_MARGIN);
    let body_rows = wrapped_rows(config.message, text_width);
    let footer_rows = if config.hint.is_some() { 2 } else { 0 };
    // Borders plus one blank row above and below the text
    let height = body_rows + footer_rows + 4;

    let area = centered(frame.area(), config.width, height);
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(config.accent))
        .title(
            Line::from(format!(" {} ", config.title))
                .centered()
                .style(Style::default().fg(config.accent).add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().bg(Color::Black).fg(Color::White));
    let inner = block.inner(area).inner(Margin {
        horizontal: SIDE_MARGIN,
        vertical: 1,
    });
    frame.render_widget(block, area);

    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(footer_rows)]).areas(inner);
    frame.render_widget(
        Paragraph::new(config.message).wrap(Wrap { trim: true }),
        body,
    );
    if let Some(hint) = config.hint {
        let [_, hint_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(footer);
        frame.render_widget(Paragraph::new(hint).right_aligned(), hint_row);
    }
}

/// Rows `text` takes when greedily word-wrapped to `width` columns
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| {
            let mut rows = 1;
            let mut used = 0;
            for word in line.split_whitespace() {
                let len = word.chars().count();
                if used > 0 && used + 1 + len > width {
                    rows += 1;
                    used = 0;
                }
                used += if used > 0 { len + 1 } else { len };
                // Words longer than the row break mid-word
                while used > width {
                    rows += 1;
                    used -= width;
                }
            }
            rows
        })
        .sum();
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_short_message_is_one_row() {
        assert_eq!(wrapped_rows("Thank you", 20), 1);
        assert_eq!(wrapped_rows("", 20), 1);
    }

    #[test]
    fn test_words_move_to_next_row() {
        // "Thank you" / "for your" / "interest!"
        assert_eq!(wrapped_rows("Thank you for your interest!", 12), 3);
    }

    #[test]
    fn test_explicit_line_breaks_count() {
        assert_eq!(wrapped_rows("a\n\nb", 10), 3);
    }

    #[test]
    fn test_long_word_spans_rows() {
        assert_eq!(wrapped_rows("abcdefghijkl", 5), 3);
    }

    #[test]
    fn test_dialog_draws_title_message_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                render_dialog(
                    frame,
                    DialogConfig {
                        title: "Heads up",
                        accent: Color::Cyan,
                        message: "Saved.",
                        hint: Some(Line::from("Enter")),
                        width: 30,
                    },
                )
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();
        assert!(rows.iter().any(|row| row.contains(" Heads up ")));
        assert!(rows.iter().any(|row| row.contains("Saved.")));
        assert!(rows.iter().any(|row| row.contains("Enter")));
        assert!(rows.iter().any(|row| row.contains('╭')));
    }
}
