//! Application state module

mod app_state;
mod forms;
mod submit_phase;

pub use app_state::*;
pub use forms::*;
pub use submit_phase::*;
