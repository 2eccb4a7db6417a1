//! First page design: charcoal page, teal form card, alert on submit

use super::forms::{draw_interest_form, SubmitButton, FORM_HEIGHT};
use super::layout::{centered, split_columns};
use super::product::{art_height, draw_air_fryer};
use super::theme::Theme;
use crate::state::InterestForm;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Header plus card: title, rule, blank, card borders and padding
const PAGE_HEIGHT: u16 = 3 + FORM_HEIGHT + 4;

/// Draw the first design into `area`
pub fn draw(frame: &mut Frame, area: Rect, form: &InterestForm) {
    let theme = Theme::VERSION1;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let (product_area, form_area) = split_columns(area, 45);
    draw_product(frame, product_area, &theme);
    draw_form_column(frame, form_area, form, &theme);
}

fn draw_product(frame: &mut Frame, area: Rect, theme: &Theme) {
    // White backdrop behind the illustration
    let backdrop = Block::default().style(Style::default().bg(theme.input_bg));
    let inner = area.inner(ratatui::layout::Margin::new(2, 1));
    frame.render_widget(backdrop, inner);

    let art_area = centered(inner, inner.width, art_height());
    draw_air_fryer(
        frame,
        art_area,
        Style::default().fg(theme.background).bg(theme.input_bg),
    );
}

fn draw_form_column(frame: &mut Frame, area: Rect, form: &InterestForm, theme: &Theme) {
    let page = centered(area, 64.min(area.width.saturating_sub(4)), PAGE_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Rule
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Card
        ])
        .split(page);

    let title = Paragraph::new(Span::styled(
        "Air Fryer Interest Form",
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let rule = Paragraph::new(Line::from("─".repeat(12)))
        .style(Style::default().fg(theme.heading))
        .alignment(Alignment::Center);
    frame.render_widget(rule, chunks[1]);

    let card = Block::default()
        .title(Span::styled(
            " Expression of Interest ",
            Style::default().fg(theme.text),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel))
        .padding(Padding::horizontal(1));
    let card_inner = card.inner(chunks[3]);
    frame.render_widget(card, chunks[3]);

    // Submit never disables here; the alert is the only acknowledgment
    let button = SubmitButton {
        label: "Submit Interest".to_string(),
        enabled: true,
    };
    draw_interest_form(frame, card_inner, form, button, theme);
}
