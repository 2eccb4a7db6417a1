//! Second page design: light page, busy button and success banner

use super::components::spinner_frame;
use super::forms::{draw_interest_form, SubmitButton, FORM_HEIGHT};
use super::layout::{centered, split_columns};
use super::product::{art_height, draw_air_fryer};
use super::theme::Theme;
use crate::state::{InterestForm, SubmitPhase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BANNER_HEIGHT: u16 = 5;
const BANNER_BG: Color = Color::Rgb(0xf0, 0xfd, 0xf4);
const BANNER_BORDER: Color = Color::Rgb(0xbb, 0xf7, 0xd0);
const BANNER_TEXT: Color = Color::Rgb(0x16, 0x65, 0x34);
const BANNER_ICON: Color = Color::Rgb(0x16, 0xa3, 0x4a);

/// Draw the second design into `area`
pub fn draw(frame: &mut Frame, area: Rect, form: &InterestForm, phase: SubmitPhase, tick: usize) {
    let theme = Theme::VERSION2;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let (product_area, form_area) = split_columns(area, 50);
    draw_product(frame, product_area, &theme);
    draw_form_column(frame, form_area, form, phase, tick, &theme);
}

fn draw_product(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.input_bg)),
        area,
    );

    let block_height = art_height() + 2 + 3;
    let inner = centered(area, area.width.saturating_sub(4), block_height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(art_height() + 2), // Framed illustration
            Constraint::Length(1),                // Spacer
            Constraint::Length(1),                // Tagline
            Constraint::Length(1),                // Sub-tagline
        ])
        .split(inner);

    let frame_block = Block::default()
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(Color::Rgb(0xf3, 0xf4, 0xf6)));
    let art_area = frame_block.inner(chunks[0]);
    frame.render_widget(frame_block, chunks[0]);
    draw_air_fryer(frame, art_area, Style::default().fg(theme.heading));

    let tagline = Paragraph::new(Span::styled(
        "Next Generation Cooking",
        Style::default().fg(theme.text),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[2]);

    let sub = Paragraph::new(Span::styled(
        "Smart. Efficient. Beautiful.",
        Style::default().fg(theme.muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(sub, chunks[3]);
}

fn draw_form_column(
    frame: &mut Frame,
    area: Rect,
    form: &InterestForm,
    phase: SubmitPhase,
    tick: usize,
    theme: &Theme,
) {
    let banner_height = if phase.is_banner_visible() {
        BANNER_HEIGHT + 1
    } else {
        0
    };
    let page_height = 4 + banner_height + FORM_HEIGHT;
    let page = centered(area, 56.min(area.width.saturating_sub(4)), page_height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Heading
            Constraint::Length(1),             // Rule
            Constraint::Length(1),             // Intro
            Constraint::Length(1),             // Spacer
            Constraint::Length(banner_height), // Success banner
            Constraint::Min(0),                // Form
        ])
        .split(page);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Interest Form",
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled("─".repeat(6), Style::default().fg(theme.heading))),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Express your interest in the Spidr Air Fryer",
            Style::default().fg(theme.muted),
        )),
        chunks[2],
    );

    if phase.is_banner_visible() {
        let banner_area = Rect {
            height: BANNER_HEIGHT,
            ..chunks[4]
        };
        draw_success_banner(frame, banner_area);
    }

    let button = if phase == SubmitPhase::Submitting {
        SubmitButton {
            label: format!("{} Submitting...", spinner_frame(tick)),
            enabled: false,
        }
    } else {
        SubmitButton {
            label: "Submit Interest →".to_string(),
            enabled: phase.is_submit_enabled(),
        }
    };
    draw_interest_form(frame, chunks[5], form, button, theme);
}

fn draw_success_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "✓",
            Style::default()
                .fg(BANNER_ICON)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Thank you",
            Style::default()
                .fg(BANNER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your interest has been recorded successfully.",
            Style::default().fg(BANNER_TEXT),
        )),
    ];

    let banner = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(Style::default().fg(BANNER_BORDER))
            .style(Style::default().bg(BANNER_BG)),
    );
    frame.render_widget(banner, area);
}
