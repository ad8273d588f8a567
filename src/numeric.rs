//! Locale-formatted amount parsing.
//!
//! Statement amounts use a space as the thousands separator and a comma as
//! the decimal separator (`1 234,56`). Normalization strips the spaces and
//! swaps the comma for a period before handing the string to the standard
//! float parser.

use std::num::ParseFloatError;

/// Parses a locale-formatted amount string into an `f64`.
///
/// # Examples
///
/// ```
/// use statement_analyzer::numeric::parse_amount;
///
/// assert_eq!(parse_amount("1 234,56").unwrap(), 1234.56);
/// assert_eq!(parse_amount("-12,3").unwrap(), -12.3);
/// assert!(parse_amount("abc").is_err());
/// ```
pub fn parse_amount(raw: &str) -> Result<f64, ParseFloatError> {
    raw.replace(' ', "").replace(',', ".").parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separator_removed() {
        assert_eq!(parse_amount("1 234,56").unwrap(), 1234.56);
        assert_eq!(parse_amount("12 345 678,90").unwrap(), 12_345_678.90);
    }

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(parse_amount("-12,3").unwrap(), -12.3);
        assert_eq!(parse_amount("0,01").unwrap(), 0.01);
    }

    #[test]
    fn test_plain_float_still_parses() {
        assert_eq!(parse_amount("10.50").unwrap(), 10.50);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
    }

    #[test]
    fn test_invalid_input_fails() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12,34,56").is_err());
    }
}
