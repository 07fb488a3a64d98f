use crate::error::LineError;

/// Parses the text of a `Number` token.
///
/// The lexer only produces digits with at most one decimal point, so this
/// fails only on text that did not come from it.
///
/// ## Errors
/// Returns [`LineError::BadToken`] if `text` is not a decimal literal.
///
/// ## Example
/// ```
/// use deskcalc::util::num::parse_literal;
///
/// assert_eq!(parse_literal("42").unwrap(), 42.0);
/// assert_eq!(parse_literal("3.").unwrap(), 3.0);
/// assert!(parse_literal("4x").is_err());
/// ```
pub fn parse_literal(text: &str) -> Result<f64, LineError> {
    text.parse().map_err(|_| LineError::BadToken { token: text.to_string() })
}

/// Magnitudes at or above this print in exponent form.
pub const EXPONENT_ABOVE: f64 = 1e16;
/// Non-zero magnitudes below this print in exponent form.
pub const EXPONENT_BELOW: f64 = 1e-6;

/// Renders a result for display.
///
/// Finite values use the shortest representation that round-trips, so whole
/// numbers print without a fractional part. Very large and very small
/// magnitudes switch to exponent form. Infinities print as `Infinity` and
/// `-Infinity`.
///
/// ## Example
/// ```
/// use deskcalc::util::num::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.2), "0.2");
/// assert_eq!(format_number(-5.0), "-5");
/// assert_eq!(format_number(1e300), "1e300");
/// assert_eq!(format_number(-2.5e-7), "-2.5e-7");
/// assert_eq!(format_number(0.000_001), "0.000001");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        format!("{sign}Infinity")
    } else if value != 0.0 && !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&value.abs()) {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}
