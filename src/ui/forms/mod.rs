//! Form rendering module
//!
//! - `field_renderer`: single field and hint drawing
//! - `interest_form`: the shared field layout both page designs use

mod field_renderer;
mod interest_form;

pub use interest_form::{draw_interest_form, SubmitButton, FORM_HEIGHT};
