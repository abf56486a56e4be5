//! Utility functions and helpers

/// Format a price for display with at most `digits` significant digits.
///
/// Infinite values render as `∞`, absent or `NaN` values as `-`. Trailing
/// zeros after the decimal point are trimmed.
pub fn format_significant(value: Option<f64>, digits: usize) -> String {
    let value = match value {
        Some(v) if !v.is_nan() => v,
        _ => return "-".to_string(),
    };
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Truncate rather than round so a bound never displays past its real value.
    // Works on the shortest round-trip digits, so no scaling can overflow or
    // pick up representation error.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => (mantissa, exponent),
            Err(_) => return value.to_string(),
        },
        None => return value.to_string(),
    };
    let kept: String = mantissa
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(digits.max(1))
        .collect();

    let (integer, fraction) = if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if kept.len() > int_len {
            (kept[..int_len].to_string(), kept[int_len..].to_string())
        } else {
            (format!("{:0<width$}", kept, width = int_len), String::new())
        }
    } else {
        let leading_zeros = "0".repeat((-exponent - 1) as usize);
        ("0".to_string(), leading_zeros + &kept)
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{}.{}", sign, integer, fraction)
    }
}

/// Calculate percentage change
pub fn calculate_percentage_change(old_value: f64, new_value: f64) -> f64 {
    if old_value > 0.0 {
        ((new_value - old_value) / old_value) * 100.0
    } else {
        0.0
    }
}

/// Generate unique ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
