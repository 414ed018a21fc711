//! Text formatting for prices and percentages.
//!
//! Two styles are used by the widget: fixed-point (list rows) and an
//! en-US locale style with digit grouping (detail panel, chart axis).

const LOCALE_MAX_FRACTION_DIGITS: usize = 3;
const NOT_AVAILABLE: &str = "N/A";

/// Formats `value` with exactly `decimals` fraction digits, e.g. `1234.57`.
pub fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    format!("{:.*}", decimals, value)
}

/// Formats like `Number.prototype.toLocaleString()` in the en-US locale:
/// grouped thousands and at most three fraction digits, trailing zeros
/// dropped, e.g. `1,320,000,000,000` or `0.123`.
pub fn locale(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let rounded = format!("{:.*}", LOCALE_MAX_FRACTION_DIGITS, value);
    let (sign, unsigned) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Price for a list row: currency symbol followed by two decimals.
pub fn price(value: Option<f64>, symbol: &str) -> String {
    match value {
        Some(v) => format!("{}{}", symbol, fixed(v, 2)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Percent change with two decimals, e.g. `-1.23%`.
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", fixed(v, 2)),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}
