//! The captured interest form contents

use serde::{Deserialize, Serialize};

/// One interest form's data, as emitted on submit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub guess_cost: String,
    #[serde(rename = "spidrPIN")]
    pub spidr_pin: String,
}

impl FormSubmission {
    /// True when every field is an empty string
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.phone_number.is_empty()
            && self.email.is_empty()
            && self.guess_cost.is_empty()
            && self.spidr_pin.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_empty() {
        assert!(FormSubmission::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_it_non_empty() {
        let submission = FormSubmission {
            guess_cost: "1".to_string(),
            ..Default::default()
        };
        assert!(!submission.is_empty());
    }

    #[test]
    fn test_serializes_with_page_field_names() {
        let submission = FormSubmission {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "(555) 123-4567".to_string(),
            email: "ada@example.com".to_string(),
            guess_cost: "299.99".to_string(),
            spidr_pin: "1234-5678".to_string(),
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "phoneNumber": "(555) 123-4567",
                "email": "ada@example.com",
                "guessCost": "299.99",
                "spidrPIN": "1234-5678",
            })
        );
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{"firstName": "Ada", "lastName": "", "phoneNumber": "",
            "email": "", "guessCost": "", "spidrPIN": "", "extra": 1}"#;
        let parsed: FormSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_name, "Ada");
    }
}
