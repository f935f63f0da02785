//! Force readings: decimal token scanning and unit conversion.

use chrono::{DateTime, Local};

use crate::config::NEWTONS_PER_GRAM;

/// A single accepted force sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Wall-clock time the sample was accepted
    pub timestamp: DateTime<Local>,
    /// Seconds since the run's anchor
    pub elapsed_time: f64,
    /// Force in newtons
    pub force: f64,
}

/// Convert grams-force to newtons
pub fn grams_to_newtons(grams: f64) -> f64 {
    grams * NEWTONS_PER_GRAM
}

/// Find the first decimal number in `text`.
///
/// A token is an optional `+`/`-` directly followed by either `digits`,
/// `digits.digits` or `.digits`. A dot that is not followed by a digit ends
/// the token, and exponents are not recognised. Returns `None` when the text
/// holds no token or the first token overflows to infinity.
pub fn first_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    (0..bytes.len())
        .find_map(|start| token_len(&bytes[start..]).map(|len| &text[start..start + len]))
        .and_then(|token| token.parse().ok())
        .filter(|v: &f64| v.is_finite())
}

/// Length of the decimal token starting at the beginning of `bytes`, if any.
fn token_len(bytes: &[u8]) -> Option<usize> {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let frac_digits = match bytes.get(pos) {
        Some(b'.') => count_digits(&bytes[pos + 1..]),
        _ => 0,
    };

    match (int_digits, frac_digits) {
        (0, 0) => None,
        (_, 0) => Some(pos),
        (_, frac) => Some(pos + 1 + frac),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(first_number("512.3"), Some(512.3));
        assert_eq!(first_number("42"), Some(42.0));
        assert_eq!(first_number(".5"), Some(0.5));
    }

    #[test]
    fn test_signs() {
        assert_eq!(first_number("-12.5"), Some(-12.5));
        assert_eq!(first_number("+7"), Some(7.0));
        assert_eq!(first_number("-.25"), Some(-0.25));
        // A sign not followed by a digit belongs to nothing
        assert_eq!(first_number("- 3"), Some(3.0));
        assert_eq!(first_number("+-4"), Some(-4.0));
    }

    #[test]
    fn test_embedded_in_text() {
        assert_eq!(first_number("Force: 120.75 g"), Some(120.75));
        assert_eq!(first_number("load=-3.0g"), Some(-3.0));
    }

    #[test]
    fn test_first_number_wins() {
        assert_eq!(first_number("12.5, 99.1"), Some(12.5));
        assert_eq!(first_number("1.2.3"), Some(1.2));
    }

    #[test]
    fn test_trailing_dot_and_exponent() {
        assert_eq!(first_number("12."), Some(12.0));
        assert_eq!(first_number("1e3"), Some(1.0));
    }

    #[test]
    fn test_no_number() {
        assert_eq!(first_number(""), None);
        assert_eq!(first_number("ERROR"), None);
        assert_eq!(first_number("-"), None);
        assert_eq!(first_number("."), None);
        assert_eq!(first_number("+."), None);
    }

    #[test]
    fn test_overflowing_token_rejected() {
        let huge = "9".repeat(400);
        assert_eq!(first_number(&huge), None);
        assert_eq!(first_number(&format!("-{} g", huge)), None);
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(first_number("Kraft µ 5,5"), Some(5.0));
        assert_eq!(first_number("°±"), None);
    }

    #[test]
    fn test_grams_to_newtons() {
        assert!(approx(grams_to_newtons(512.3), 512.3 * 0.00980665));
        assert!(approx(grams_to_newtons(1000.0), 9.80665));
        assert!(approx(grams_to_newtons(0.0), 0.0));
        assert!(approx(grams_to_newtons(-100.0), -0.980665));
    }
}
