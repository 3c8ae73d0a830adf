//! Shared parsing and formatting helpers.

/// Formats a count with comma thousands separators, e.g. `3292679` as
/// `3,292,679`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parses a float that carries an integral value, such as `5.0`.
///
/// Tables that mix hourly and daily rows store integer columns as floats.
pub fn parse_integral_float(input: &str) -> Option<i64> {
    let value: f64 = input.trim().parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        #[allow(clippy::cast_possible_truncation)]
        Some(value as i64)
    } else {
        None
    }
}

/// Parses a non-negative count, accepting integral floats.
pub fn parse_count(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    trimmed.parse::<u32>().ok().or_else(|| {
        parse_integral_float(trimmed).and_then(|value| u32::try_from(value).ok())
    })
}

/// Parses a boolean flag written as `0`/`1`, `true`/`false` or `yes`/`no`.
pub fn parse_flag(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" | "yes" | "y" => Some(true),
        "0" | "0.0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Whether a cell stands for a missing value.
pub fn is_missing(input: &str) -> bool {
    matches!(input.trim(), "" | "NaN" | "nan" | "NA" | "N/A" | "null")
}
