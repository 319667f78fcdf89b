//! Card number and CVV checks

use crate::required::{validate_required, FieldSource, PAYMENT_FIELDS};
use crate::result::ValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

/// Digits in a complete card number
pub const CARD_DIGITS: usize = 16;

/// Longest formatted card number: 16 digits plus 3 separators
pub const FORMATTED_CARD_LEN: usize = 19;

pub const CARD_LENGTH_MESSAGE: &str = "El número de tarjeta debe tener 16 dígitos.";
pub const CVV_MESSAGE: &str = "El CVV debe tener 3 dígitos.";

static CVV_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

/// Keeps only the ASCII digits of `raw`
pub fn card_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a card number as the user types.
///
/// Strips everything but digits, groups them by four separated by a single
/// space and caps the result at 19 characters.
///
/// # Examples
/// ```
/// use taller_validation::format_card_number;
/// assert_eq!(format_card_number("4111-1111 1111x1111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("12345"), "1234 5");
/// assert_eq!(format_card_number(""), "");
/// ```
pub fn format_card_number(raw: &str) -> String {
    let digits = card_digits(raw);
    let mut formatted = String::with_capacity(FORMATTED_CARD_LEN);

    for (i, digit) in digits.chars().take(CARD_DIGITS).enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(digit);
    }

    formatted
}

pub fn has_card_length(raw: &str) -> bool {
    card_digits(raw).len() == CARD_DIGITS
}

/// Exactly three ASCII digits, nothing else (no trimming)
pub fn is_valid_cvv(raw: &str) -> bool {
    CVV_PATTERN.is_match(raw)
}

/// Validates the payment form.
///
/// Reports missing required fields first, then the card length and CVV
/// rules. All checks run; nothing is short-circuited.
pub fn validate_payment<S: FieldSource + ?Sized>(form: &S) -> ValidationResult {
    let mut result = validate_required(form, PAYMENT_FIELDS);

    let card = form.field_value("cardNumber").unwrap_or_default();
    if !has_card_length(card) {
        result.push(CARD_LENGTH_MESSAGE);
    }

    let cvv = form.field_value("cvv").unwrap_or_default();
    if !is_valid_cvv(cvv) {
        result.push(CVV_MESSAGE);
    }

    result
}

/// Hides every digit group but the last one, keeping the separators
pub fn mask_card_number(formatted: &str) -> String {
    let groups: Vec<&str> = formatted.split(' ').collect();
    let last = groups.len().saturating_sub(1);

    groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            if i == last {
                group.to_string()
            } else {
                "*".repeat(group.chars().count())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn payment(card: &str, holder: &str, cvv: &str) -> HashMap<String, String> {
        HashMap::from([
            ("cardNumber".to_string(), card.to_string()),
            ("cardHolder".to_string(), holder.to_string()),
            ("cvv".to_string(), cvv.to_string()),
        ])
    }

    #[rstest]
    #[case("", "")]
    #[case("4", "4")]
    #[case("4111", "4111")]
    #[case("41111", "4111 1")]
    #[case("411111111111", "4111 1111 1111")]
    #[case("4111111111111111", "4111 1111 1111 1111")]
    #[case("41111111111111112222", "4111 1111 1111 1111")]
    #[case("4111 1111-1111 1111", "4111 1111 1111 1111")]
    #[case("abc", "")]
    #[case("12a34b56", "1234 56")]
    fn test_format_card_number(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_card_number(raw), expected);
    }

    #[test]
    fn test_format_groups_for_every_length() {
        let all = "1234567890123456";
        for n in 0..=CARD_DIGITS {
            let formatted = format_card_number(&all[..n]);
            assert!(formatted.len() <= FORMATTED_CARD_LEN);
            assert!(!formatted.starts_with(' '));
            assert!(!formatted.ends_with(' '));
            assert!(!formatted.contains("  "));

            let groups: Vec<&str> = formatted.split(' ').filter(|g| !g.is_empty()).collect();
            for (i, group) in groups.iter().enumerate() {
                if i + 1 < groups.len() {
                    assert_eq!(group.len(), 4);
                } else {
                    assert!((1..=4).contains(&group.len()));
                }
            }
            assert_eq!(card_digits(&formatted), &all[..n]);
        }
    }

    #[test]
    fn test_format_output_has_only_digits_and_spaces() {
        for raw in ["4a1b1c1d 2e2f2g2h!!3i3j3k3l--4m4n4o4p", "٣٤٥ 12", "€€ 99 99 ¿?"] {
            let formatted = format_card_number(raw);
            assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == ' '));
            assert!(!formatted.contains("  "));
        }
    }

    #[test]
    fn test_format_is_idempotent() {
        let once = format_card_number("4111111111111111");
        assert_eq!(format_card_number(&once), once);
    }

    #[rstest]
    #[case("123", true)]
    #[case("000", true)]
    #[case("12", false)]
    #[case("1234", false)]
    #[case(" 123", false)]
    #[case("12a", false)]
    #[case("", false)]
    fn test_cvv(#[case] cvv: &str, #[case] valid: bool) {
        assert_eq!(is_valid_cvv(cvv), valid);
    }

    #[test]
    fn test_valid_payment() {
        let form = payment("4111 1111 1111 1111", "Ana Pérez", "123");
        assert!(validate_payment(&form).is_valid());
    }

    #[test]
    fn test_short_card_number() {
        let form = payment("4111 1111 1111 111", "Ana Pérez", "123");
        let result = validate_payment(&form);
        assert_eq!(result.errors(), [CARD_LENGTH_MESSAGE]);
    }

    #[test]
    fn test_empty_payment_reports_everything() {
        let form = payment("", "", "");
        let result = validate_payment(&form);
        assert_eq!(
            result.errors(),
            [
                "Número de tarjeta es requerido.",
                "Nombre del titular es requerido.",
                "CVV es requerido.",
                CARD_LENGTH_MESSAGE,
                CVV_MESSAGE,
            ]
        );
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("4111 1111 1111 1234"), "**** **** **** 1234");
        assert_eq!(mask_card_number("1234"), "1234");
        assert_eq!(mask_card_number(""), "");
    }
}
