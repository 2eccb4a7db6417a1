//! Input masking shared by both form variants
//!
//! Every formatter takes the raw candidate value of a field (the stored value
//! with the user's edit applied) and returns the string to store. `None`
//! means the edit is rejected and the previous value stays in place.

/// Maximum digits accepted by the phone number field
pub const PHONE_MAX_DIGITS: usize = 10;

/// Maximum digits accepted by the Spidr PIN field
pub const PIN_MAX_DIGITS: usize = 16;

/// PIN digits per dash-separated group
const PIN_GROUP_LEN: usize = 4;

/// How a field's raw input is turned into its stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, stored verbatim
    Text,
    /// Free text, no format check
    Email,
    /// `(AAA) BBB-CCCC` once all ten digits are present
    Phone,
    /// Dash-grouped 16 digit PIN
    Pin,
    /// Digits and periods only
    Cost,
}

impl FieldKind {
    /// Apply this kind's formatter to a raw candidate value
    pub fn format(self, raw: &str) -> Option<String> {
        match self {
            FieldKind::Text | FieldKind::Email => Some(raw.to_string()),
            FieldKind::Phone => format_phone_number(raw),
            FieldKind::Pin => format_spidr_pin(raw),
            FieldKind::Cost => Some(format_guess_cost(raw)),
        }
    }
}

/// Keep only the ASCII digits of `raw`
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Format a phone number.
///
/// Only a complete ten digit sequence is masked; shorter input is stored as
/// the plain digit string.
pub fn format_phone_number(raw: &str) -> Option<String> {
    let digits = digits_only(raw);
    if digits.len() > PHONE_MAX_DIGITS {
        return None;
    }
    if digits.len() < PHONE_MAX_DIGITS {
        return Some(digits);
    }

    let (area, rest) = digits.split_at(3);
    let (exchange, line) = rest.split_at(3);
    Some(format!("({area}) {exchange}-{line}"))
}

/// Format a Spidr PIN as dash-separated groups of four digits.
///
/// A dash is only inserted when another digit follows, so `12345678` becomes
/// `1234-5678` with no trailing separator.
pub fn format_spidr_pin(raw: &str) -> Option<String> {
    let digits = digits_only(raw);
    if digits.len() > PIN_MAX_DIGITS {
        return None;
    }

    let mut formatted = String::with_capacity(digits.len() + digits.len() / PIN_GROUP_LEN);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && idx % PIN_GROUP_LEN == 0 {
            formatted.push('-');
        }
        formatted.push(digit);
    }
    Some(formatted)
}

/// Strip everything except digits and periods from a cost guess
pub fn format_guess_cost(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;
        use proptest::prelude::*;

        #[test]
        fn test_full_number_is_masked() {
            assert_eq!(
                format_phone_number("5551234567"),
                Some("(555) 123-4567".to_string())
            );
        }

        #[test]
        fn test_partial_number_stays_plain() {
            assert_eq!(format_phone_number("555123"), Some("555123".to_string()));
            assert_eq!(format_phone_number("555"), Some("555".to_string()));
        }

        #[test]
        fn test_masked_input_is_reparsed() {
            assert_eq!(
                format_phone_number("(555) 123-4567"),
                Some("(555) 123-4567".to_string())
            );
        }

        #[test]
        fn test_deleting_from_masked_number_unmasks() {
            assert_eq!(
                format_phone_number("(555) 123-456"),
                Some("555123456".to_string())
            );
        }

        #[test]
        fn test_eleventh_digit_is_rejected() {
            assert_eq!(format_phone_number("(555) 123-45678"), None);
            assert_eq!(format_phone_number("55512345678"), None);
        }

        #[test]
        fn test_non_digits_are_dropped() {
            assert_eq!(format_phone_number("55a5-12"), Some("55512".to_string()));
        }

        #[test]
        fn test_non_ascii_digits_are_not_digits() {
            assert_eq!(format_phone_number("٣٤٥"), Some(String::new()));
        }

        proptest! {
            #[test]
            fn prop_keeps_digits_within_bound(input in "\\PC{0,30}") {
                let digits = digits_only(&input);
                match format_phone_number(&input) {
                    Some(out) => {
                        prop_assert!(digits.len() <= PHONE_MAX_DIGITS);
                        prop_assert_eq!(digits_only(&out), digits);
                    }
                    None => {
                        prop_assert!(digits.len() > PHONE_MAX_DIGITS);
                    }
                }
            }

            #[test]
            fn prop_formatting_is_idempotent(input in "[0-9() -]{0,16}") {
                if let Some(out) = format_phone_number(&input) {
                    prop_assert_eq!(format_phone_number(&out), Some(out.clone()));
                }
            }
        }
    }

    mod pin {
        use super::*;
        use pretty_assertions::assert_eq;
        use proptest::prelude::*;

        #[test]
        fn test_full_pin() {
            assert_eq!(
                format_spidr_pin("1234567890123456"),
                Some("1234-5678-9012-3456".to_string())
            );
        }

        #[test]
        fn test_short_pin_has_no_dash() {
            assert_eq!(format_spidr_pin("123"), Some("123".to_string()));
            assert_eq!(format_spidr_pin("1234"), Some("1234".to_string()));
        }

        #[test]
        fn test_no_trailing_dash_on_group_boundary() {
            assert_eq!(format_spidr_pin("12345678"), Some("1234-5678".to_string()));
        }

        #[test]
        fn test_progressive_masking() {
            assert_eq!(format_spidr_pin("12345"), Some("1234-5".to_string()));
            assert_eq!(format_spidr_pin("1234-56789"), Some("1234-5678-9".to_string()));
        }

        #[test]
        fn test_seventeenth_digit_is_rejected() {
            assert_eq!(format_spidr_pin("12345678901234567"), None);
            assert_eq!(format_spidr_pin("1234-5678-9012-34567"), None);
        }

        proptest! {
            #[test]
            fn prop_output_is_grouped_digits(input in "\\PC{0,40}") {
                let digits = digits_only(&input);
                match format_spidr_pin(&input) {
                    Some(out) => {
                        prop_assert!(digits.len() <= PIN_MAX_DIGITS);
                        prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '-'));
                        prop_assert_eq!(digits_only(&out), digits);
                        prop_assert!(!out.ends_with('-'));
                        prop_assert!(out.split('-').all(|group| group.len() <= PIN_GROUP_LEN));
                    }
                    None => {
                        prop_assert!(digits.len() > PIN_MAX_DIGITS);
                    }
                }
            }

            #[test]
            fn prop_formatting_is_idempotent(input in "[0-9-]{0,24}") {
                if let Some(out) = format_spidr_pin(&input) {
                    prop_assert_eq!(format_spidr_pin(&out), Some(out.clone()));
                }
            }
        }
    }

    mod guess_cost {
        use super::*;
        use pretty_assertions::assert_eq;
        use proptest::prelude::*;

        #[test]
        fn test_keeps_digits_and_periods_in_order() {
            assert_eq!(format_guess_cost("$299.99"), "299.99");
            assert_eq!(format_guess_cost("a1.b2.c3"), "1.2.3");
        }

        #[test]
        fn test_allows_multiple_periods() {
            assert_eq!(format_guess_cost("..1..2"), "..1..2");
        }

        proptest! {
            #[test]
            fn prop_output_is_filtered_subsequence(input in "\\PC{0,40}") {
                let expected: String = input
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                prop_assert_eq!(format_guess_cost(&input), expected);
            }
        }
    }

    mod field_kind {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_and_email_pass_through() {
            assert_eq!(FieldKind::Text.format("Ada 1!"), Some("Ada 1!".to_string()));
            assert_eq!(FieldKind::Email.format("not-an-email"), Some("not-an-email".to_string()));
        }

        #[test]
        fn test_dispatches_to_formatters() {
            assert_eq!(FieldKind::Phone.format("5551234567"), Some("(555) 123-4567".to_string()));
            assert_eq!(FieldKind::Pin.format("12345"), Some("1234-5".to_string()));
            assert_eq!(FieldKind::Cost.format("1,5"), Some("15".to_string()));
            assert_eq!(FieldKind::Pin.format("12345678901234567"), None);
        }
    }
}
