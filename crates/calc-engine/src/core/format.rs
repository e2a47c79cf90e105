//! Numeral parsing, rounding and rendering
//!
//! Results are rounded to a number of significant digits before they are
//! shown, so binary representation noise such as `0.30000000000000004`
//! never reaches the display.

/// Rounds `value` to `digits` significant digits.
///
/// Zero and non-finite values pass through unchanged. A `digits` of zero is
/// treated as one.
#[must_use]
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let precision = digits.max(1) - 1;
    format!("{value:.precision$e}").parse().unwrap_or(value)
}

/// Renders a number as its canonical decimal string.
///
/// Uses the shortest representation that round-trips. Magnitudes in
/// `[1e-6, 1e21)` are written positionally, anything else in exponent form
/// with an explicit exponent sign (`1e+21`, `1.5e-7`). Negative zero renders
/// as `"0"`.
#[must_use]
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exponential = format!("{value:e}");
    match exponential.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{mantissa}e{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}e+{exp}"),
        None => exponential,
    }
}

/// Parses display text back into a number.
///
/// Returns `None` for the `"Error"` sentinel and anything else that is not a
/// finite numeral. Trailing decimal points (`"5."`) are accepted.
#[must_use]
pub fn parse_display(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
