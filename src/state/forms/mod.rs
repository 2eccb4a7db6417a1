//! Form domain layer
//!
//! Field values, the interest form itself and the submission snapshot it
//! produces.

mod field;
mod form_state;
mod submission;

pub use field::FormField;
pub use form_state::{Form, FormVariant, InterestForm};
pub use submission::FormSubmission;
