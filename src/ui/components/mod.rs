//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, spinner_frame, BUTTON_HEIGHT};
pub use dialog::render_alert_dialog;
