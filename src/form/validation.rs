//! Advisory validators for the numeric text fields. A non-empty return value
//! is the message to surface next to the field; validation never blocks the
//! edited value from being committed upstream.

pub const NUMBER_ABOVE_ZERO_MESSAGE: &str = "Numbers only and must be greater than zero";
pub const NUMBER_AT_LEAST_ZERO_MESSAGE: &str = "Numbers only and must be zero or greater";

/// Batch interval, max rate and sampling duration must parse as a number
/// strictly greater than zero.
pub fn validate_number(value: &str) -> String {
    if parses_above_zero(value) {
        String::new()
    } else {
        NUMBER_ABOVE_ZERO_MESSAGE.to_string()
    }
}

/// The watermark value is required (empty is invalid) and must parse as a
/// number greater than or equal to zero.
pub fn validate_watermark_value(value: &str) -> String {
    if value.is_empty() || !parses_at_least_zero(value) {
        NUMBER_AT_LEAST_ZERO_MESSAGE.to_string()
    } else {
        String::new()
    }
}

fn parses_above_zero(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|number| number.is_finite() && number > 0.0)
        .unwrap_or(false)
}

fn parses_at_least_zero(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|number| number.is_finite() && number >= 0.0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_and_non_numeric_values() {
        for bad in ["0", "-3", "abc", ""] {
            assert_eq!(validate_number(bad), NUMBER_ABOVE_ZERO_MESSAGE, "{bad:?}");
        }
    }

    #[test]
    fn accepts_positive_numbers_including_fractions() {
        assert_eq!(validate_number("5"), "");
        assert_eq!(validate_number("0.5"), "");
    }

    #[test]
    fn watermark_requires_a_value() {
        assert_eq!(validate_watermark_value(""), NUMBER_AT_LEAST_ZERO_MESSAGE);
        assert_eq!(validate_watermark_value("-1"), NUMBER_AT_LEAST_ZERO_MESSAGE);
    }

    #[test]
    fn watermark_accepts_zero_and_up() {
        assert_eq!(validate_watermark_value("0"), "");
        assert_eq!(validate_watermark_value("42"), "");
        assert_eq!(validate_watermark_value("1.5"), "");
    }
}
