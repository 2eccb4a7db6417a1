//! Interest form field layout

use super::field_renderer::{draw_field, draw_hint};
use crate::state::{Form, InterestForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Rows the field stack needs
pub const FORM_HEIGHT: u16 = 5 * 3 + 1 + 1 + BUTTON_HEIGHT;

/// How the submit control should look right now
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

/// Draw every field of the form followed by the submit button
pub fn draw_interest_form(
    frame: &mut Frame,
    area: Rect,
    form: &InterestForm,
    button: SubmitButton,
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First / last name
            Constraint::Length(3),             // Phone
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Cost guess
            Constraint::Length(3),             // PIN
            Constraint::Length(1),             // PIN hint
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(area);

    let names = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let active = form.active_field();
    let slots = [names[0], names[1], rows[1], rows[2], rows[3], rows[4]];
    for (index, slot) in slots.into_iter().enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, slot, field, active == index, theme);
        }
    }

    if let Some(hint) = form.spidr_pin.hint {
        draw_hint(frame, rows[5], hint, theme);
    }

    render_button(
        frame,
        rows[7],
        &button.label,
        form.is_submit_active(),
        button.enabled,
        theme,
    );
}
