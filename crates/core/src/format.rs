//! Display formatting for metric values.
//!
//! Mirrors the locale formatting the dashboard applies before a scalar
//! reaches a metric card: thousands grouping for the integer part, at
//! most two fractional digits, and an em dash for absent values.

/// Placeholder rendered when a metric has no value.
pub const EMPTY_VALUE: &str = "\u{2014}";

/// Round to two decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a metric scalar for a card.
///
/// `None` and non-finite values render as [`EMPTY_VALUE`]. Whole numbers
/// render with thousands grouping and no fraction; everything else keeps
/// up to two fractional digits with trailing zeros trimmed.
pub fn metric_value(value: Option<f64>) -> String {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return EMPTY_VALUE.to_string(),
    };

    let rounded = round2(value);
    let negative = rounded < 0.0;
    let magnitude = rounded.abs();
    let integer = group_integer(magnitude.trunc() as u64);

    let body = if magnitude.fract() == 0.0 {
        integer
    } else {
        let fraction = format!("{:.2}", magnitude.fract());
        // "0.50" -> "5", "0.07" -> "07"
        let digits = fraction.trim_start_matches("0.").trim_end_matches('0');
        format!("{integer}.{digits}")
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Insert thousands separators into a non-negative integer.
fn group_integer(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
