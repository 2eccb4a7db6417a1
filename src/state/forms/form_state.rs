//! Interest form state

use super::field::FormField;
use super::submission::FormSubmission;
use crate::format::FieldKind;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Which design of the form is shown; decides labels and placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// Dark teal page with a blocking alert on submit
    Version1,
    /// Light page with a timed success banner
    Version2,
}

impl FormVariant {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Version1 => "version1",
            Self::Version2 => "version2",
        }
    }
}

const PIN_HINT: &str = "Formatted automatically with dashes";

/// Number of input fields; the submit button sits at this index
const INPUT_COUNT: usize = 6;

/// The interest form: six inputs followed by the submit button
#[derive(Debug, Clone)]
pub struct InterestForm {
    pub variant: FormVariant,
    pub first_name: FormField,
    pub last_name: FormField,
    pub phone_number: FormField,
    pub email: FormField,
    pub guess_cost: FormField,
    pub spidr_pin: FormField,
    pub active_field_index: usize,
}

impl InterestForm {
    pub fn new(variant: FormVariant) -> Self {
        let (first, last, phone, email, pin_label) = match variant {
            FormVariant::Version1 => (
                "First name",
                "Last name",
                "(123) 123-4567",
                "your.email@example.com",
                "Very, Very Secret 16-Digit Spidr PIN",
            ),
            FormVariant::Version2 => (
                "John",
                "Doe",
                "(555) 123-4567",
                "john.doe@email.com",
                "Secret 16-Digit Spidr PIN",
            ),
        };

        Self {
            variant,
            first_name: FormField::new("firstName", "First Name", first, FieldKind::Text),
            last_name: FormField::new("lastName", "Last Name", last, FieldKind::Text),
            phone_number: FormField::new("phoneNumber", "Phone Number", phone, FieldKind::Phone),
            email: FormField::new("email", "Email Address", email, FieldKind::Email),
            guess_cost: FormField::new(
                "guessCost",
                "Guess the Air Fryer's Cost",
                "299.99",
                FieldKind::Cost,
            )
            .with_prefix("$"),
            spidr_pin: FormField::new("spidrPIN", pin_label, "####-####-####-####", FieldKind::Pin)
                .with_hint(PIN_HINT),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == INPUT_COUNT
    }

    /// Snapshot the current values
    pub fn to_submission(&self) -> FormSubmission {
        FormSubmission {
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            phone_number: self.phone_number.as_text().to_string(),
            email: self.email.as_text().to_string(),
            guess_cost: self.guess_cost.as_text().to_string(),
            spidr_pin: self.spidr_pin.as_text().to_string(),
        }
    }

    /// Empty every field. Focus is kept where it is.
    pub fn reset(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.phone_number.clear();
        self.email.clear();
        self.guess_cost.clear();
        self.spidr_pin.clear();
    }
}

impl Form for InterestForm {
    fn field_count(&self) -> usize {
        INPUT_COUNT + 1 // inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(INPUT_COUNT);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.phone_number),
            3 => Some(&mut self.email),
            4 => Some(&mut self.guess_cost),
            5 => Some(&mut self.spidr_pin),
            // Submit button, no FormField for it
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.phone_number),
            3 => Some(&self.email),
            4 => Some(&self.guess_cost),
            5 => Some(&self.spidr_pin),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> InterestForm {
        let mut form = InterestForm::new(FormVariant::Version2);
        form.first_name.set_input("Ada");
        form.last_name.set_input("Lovelace");
        form.phone_number.set_input("5551234567");
        form.email.set_input("ada@example.com");
        form.guess_cost.set_input("$299.99");
        form.spidr_pin.set_input("1234567890123456");
        form
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_on_first_name() {
            let form = InterestForm::new(FormVariant::Version1);
            assert_eq!(form.active_field_index, 0);
            assert!(!form.is_submit_active());
        }

        #[test]
        fn test_field_count_includes_button() {
            let form = InterestForm::new(FormVariant::Version1);
            assert_eq!(form.field_count(), 7);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = InterestForm::new(FormVariant::Version1);
            for _ in 0..7 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_button() {
            let mut form = InterestForm::new(FormVariant::Version1);
            form.prev_field();
            assert!(form.is_submit_active());
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = InterestForm::new(FormVariant::Version1);
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 6);
        }

        #[test]
        fn test_get_field_order() {
            let form = InterestForm::new(FormVariant::Version1);
            let names: Vec<_> = (0..7)
                .filter_map(|i| form.get_field(i).map(|f| f.name))
                .collect();
            assert_eq!(
                names,
                vec!["firstName", "lastName", "phoneNumber", "email", "guessCost", "spidrPIN"]
            );
        }
    }

    mod variants {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_version1_copy() {
            let form = InterestForm::new(FormVariant::Version1);
            assert_eq!(form.first_name.placeholder, "First name");
            assert_eq!(form.phone_number.placeholder, "(123) 123-4567");
            assert_eq!(form.spidr_pin.label, "Very, Very Secret 16-Digit Spidr PIN");
        }

        #[test]
        fn test_version2_copy() {
            let form = InterestForm::new(FormVariant::Version2);
            assert_eq!(form.first_name.placeholder, "John");
            assert_eq!(form.email.placeholder, "john.doe@email.com");
            assert_eq!(form.spidr_pin.label, "Secret 16-Digit Spidr PIN");
        }

        #[test]
        fn test_shared_decorations() {
            for variant in [FormVariant::Version1, FormVariant::Version2] {
                let form = InterestForm::new(variant);
                assert_eq!(form.guess_cost.prefix, Some("$"));
                assert_eq!(form.spidr_pin.hint, Some(PIN_HINT));
            }
        }
    }

    mod snapshot {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_to_submission_copies_formatted_values() {
            let submission = filled_form().to_submission();
            assert_eq!(
                submission,
                FormSubmission {
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                    phone_number: "(555) 123-4567".to_string(),
                    email: "ada@example.com".to_string(),
                    guess_cost: "299.99".to_string(),
                    spidr_pin: "1234-5678-9012-3456".to_string(),
                }
            );
        }

        #[test]
        fn test_reset_empties_all_fields() {
            let mut form = filled_form();
            form.set_active_field(4);
            form.reset();
            assert!(form.to_submission().is_empty());
            assert_eq!(form.active_field_index, 4);
        }
    }
}
