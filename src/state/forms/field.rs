//! Form field value objects

use crate::format::FieldKind;

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Muted line rendered under the input
    pub hint: Option<&'static str>,
    /// Fixed text drawn before the value (e.g. a currency sign)
    pub prefix: Option<&'static str>,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    /// Create a new empty field
    pub fn new(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            hint: None,
            prefix: None,
            kind,
            value: String::new(),
        }
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Get the stored value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the value with a raw candidate, run through the field's formatter.
    ///
    /// Returns false when the formatter rejected the candidate; the stored value
    /// is then left untouched.
    pub fn set_input(&mut self, raw: &str) -> bool {
        match self.kind.format(raw) {
            Some(formatted) => {
                self.value = formatted;
                true
            }
            None => false,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) -> bool {
        let mut candidate = self.value.clone();
        candidate.push(c);
        self.set_input(&candidate)
    }

    /// Append pasted text to the field value.
    ///
    /// Inputs are single-line, so line breaks, tabs and other control
    /// characters in the paste are dropped.
    pub fn push_str(&mut self, text: &str) -> bool {
        let mut candidate = self.value.clone();
        candidate.extend(text.chars().filter(|c| !c.is_control()));
        self.set_input(&candidate)
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        let mut candidate = self.value.clone();
        candidate.pop();
        // Removing characters never grows the digit count, so this cannot be rejected
        self.set_input(&candidate);
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
