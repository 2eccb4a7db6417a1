//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod product;
mod theme;
mod version1;
mod version2;

use crate::app::App;
use crate::state::View;
use components::render_alert_dialog;
use ratatui::{
    style::{Color, Style},
    widgets::Block,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    match (&app.state.current_view, app.state.form.as_ref()) {
        (View::Version1, Some(form)) => version1::draw(frame, content_area, form),
        (View::Version2, Some(form)) => version2::draw(
            frame,
            content_area,
            form,
            app.state.submit_phase,
            app.tick,
        ),
        // Nothing is mounted: only the page background shows
        _ => frame.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(0xf9, 0xfa, 0xfb))),
            content_area,
        ),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.state.alert.as_deref() {
        render_alert_dialog(frame, message);
    }
}
