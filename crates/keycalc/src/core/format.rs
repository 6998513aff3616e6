//! Display formatting and entry parsing
//!
//! Numbers are rendered in "general" notation with a fixed number of
//! significant digits and an invariant `.` decimal separator. Fixed notation
//! is used while the decimal exponent lies in `-5 < e < digits`, scientific
//! notation (`1.5E+20`, `1E-05`) otherwise. Trailing fractional zeros are
//! stripped from the mantissa.

/// Significant digits used by the display
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 15;

/// Largest meaningful precision for an `f64`
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Formats a value for the display.
///
/// `significant_digits` is clamped to `1..=17`. Negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64, significant_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
    // Rounded scientific form tells us the exponent after rounding
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    let max_exponent = digits as i32;
    if exponent > -5 && exponent < max_exponent {
        let decimals = (max_exponent - 1 - exponent).max(0) as usize;
        let fixed = format!("{value:.decimals$}");
        trim_fraction(&fixed).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}E{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    }
}

/// Strips trailing zeros after a decimal point, then a lone trailing point
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Parses an entry buffer.
///
/// Returns `None` for an empty or unparsable buffer. Digit text too large
/// for `f64` parses to an infinity so callers can reject it.
#[must_use]
pub fn parse_entry(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || ".Ee+-".contains(c)) {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}
