//! Blocking acknowledgment dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render a modal alert centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, message: &str) {
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to continue"),
    ]);

    render_dialog(
        frame,
        DialogConfig {
            title: "Spidr says",
            accent: Color::Cyan,
            message,
            hint: Some(hint),
            width: 56,
        },
    );
}
