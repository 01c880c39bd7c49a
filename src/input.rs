//! Lenient numeric coercion and field assignment parsing
//!
//! User-entered numbers never produce an error: anything that does not start
//! with a decimal literal becomes zero before it reaches the calculator.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::InputError;
use crate::models::InputField;

static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("number prefix pattern is valid")
});

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z_-]*)\s*(?:=\s*|\s+)(.*?)\s*$")
        .expect("assignment pattern is valid")
});

/// Coerce free-form text to a number.
///
/// Parses the longest leading decimal literal after any leading whitespace,
/// so `"12abc"` is 12. Unparseable text, NaN and negative zero all become 0.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim_start();
    let value = NUMBER_PREFIX
        .find(text)
        .and_then(|m| {
            let literal = m.as_str();
            match literal.trim_start_matches(['+', '-']) {
                "Infinity" if literal.starts_with('-') => Some(f64::NEG_INFINITY),
                "Infinity" => Some(f64::INFINITY),
                _ => literal.parse::<f64>().ok(),
            }
        })
        .unwrap_or(0.0);

    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Parse `field=value` or `field value` into a field and a coerced number
pub fn parse_assignment(text: &str) -> Result<(InputField, f64), InputError> {
    let caps = ASSIGNMENT
        .captures(text)
        .ok_or_else(|| InputError::MalformedAssignment(text.trim().to_string()))?;
    let field: InputField = caps[1].parse()?;
    Ok((field, coerce_number(&caps[2])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number("  3.5"), 3.5);
        assert_eq!(coerce_number("-7"), -7.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("+2."), 2.0);
    }

    #[test]
    fn leading_literal_wins_over_trailing_junk() {
        assert_eq!(coerce_number("12abc"), 12.0);
        assert_eq!(coerce_number("150/hr"), 150.0);
        assert_eq!(coerce_number("2e"), 2.0);
        assert_eq!(coerce_number("1.2.3"), 1.2);
    }

    #[test]
    fn only_ascii_digits_form_the_literal() {
        assert_eq!(coerce_number("12\u{0663}"), 12.0);
        assert_eq!(coerce_number("\u{0663}12"), 0.0);
        assert_eq!(coerce_number("1.5\u{0665}e2"), 1.5);
    }

    #[test]
    fn garbage_coerces_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("$150"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("-"), 0.0);
    }

    #[test]
    fn negative_zero_becomes_positive_zero() {
        assert!(coerce_number("-0").is_sign_positive());
    }

    #[test]
    fn infinity_is_accepted() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn assignments_accept_both_separators() {
        assert_eq!(
            parse_assignment("hourlyRate=200").unwrap(),
            (InputField::HourlyRate, 200.0)
        );
        assert_eq!(
            parse_assignment("  minutes_auto 12 ").unwrap(),
            (InputField::MinutesAuto, 12.0)
        );
        assert_eq!(
            parse_assignment("recordings-per-month = lots").unwrap(),
            (InputField::RecordingsPerMonth, 0.0)
        );
    }

    #[test]
    fn unknown_field_is_an_error() {
        assert_eq!(
            parse_assignment("budget=10").unwrap_err(),
            InputError::UnknownField("budget".to_string())
        );
        assert!(matches!(
            parse_assignment("=10"),
            Err(InputError::MalformedAssignment(_))
        ));
    }
}
