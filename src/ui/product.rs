//! Product illustration shared by both designs

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

const AIR_FRYER: &[&str] = &[
    "   .-----------------.   ",
    "  /  SPIDR     ( o )  \\  ",
    " |   ._____________.   | ",
    " |   |             |   | ",
    " |   |   [=====]   |   | ",
    " |   |             |   | ",
    " |   '-------------'   | ",
    " |        _____        | ",
    " |       |_____|       | ",
    "  \\___________________/  ",
    "    ||             ||    ",
];

/// Height of the illustration in rows
pub fn art_height() -> u16 {
    AIR_FRYER.len() as u16
}

/// Draw the air fryer centered horizontally in `area`, starting at its top
pub fn draw_air_fryer(frame: &mut Frame, area: Rect, style: Style) {
    let lines: Vec<Line> = AIR_FRYER.iter().map(|l| Line::from(*l)).collect();
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
