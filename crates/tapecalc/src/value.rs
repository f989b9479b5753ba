//! Numeric to textual conversion
//!
//! The engine stores the edited value as text and converts at operation
//! boundaries. Parsing accepts exactly the forms the engine itself produces
//! (integers, decimals, a trailing `.` mid-edit, an optional leading `-`);
//! rendering uses the minimal round-trip representation.

/// Rounds a value to 12 significant decimal digits.
///
/// Suppresses binary floating-point artifacts in results shown to the user:
/// an addition that would display as `0.30000000000000004` is truncated to
/// `0.3` before it is rendered or fed into a chained operation.
#[must_use]
pub fn round_significant(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    // 11 fractional digits in exponent form = 12 significant digits.
    format!("{value:.11e}").parse().unwrap_or(value)
}

/// Renders a value in its canonical textual form.
///
/// Minimal digits, no forced trailing zeros, and no scientific notation for
/// the ranges ordinary keypad arithmetic produces. Negative zero renders as
/// `"0"`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Parses engine-produced numeric text.
///
/// The engine never feeds this anything but its own output, so a parse
/// failure maps to zero rather than an error path.
#[must_use]
pub fn parse_value(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}
