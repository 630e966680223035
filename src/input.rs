//! Raw input field parsing.
//!
//! Form fields arrive as strings. The lenient parsers read the leading numeric
//! prefix (so `"42.195 km"` is 42.195 and `"3h"` is 3) and fall back to 0 for
//! anything unreadable, negative or non-finite. Hosts that want to reject bad
//! input instead can use [`parse_field`].

use crate::error::{OptionExt, PlannerError, Result};

/// Byte length of the longest numeric prefix of `s` (after leading whitespace
/// has been trimmed by the caller). Zero when no digit is present.
fn numeric_prefix_len(s: &str, allow_fraction: bool) -> usize {
    let bytes = s.as_bytes();
    let mut idx = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let mut digits = idx - int_start;

    if allow_fraction && idx < bytes.len() && bytes[idx] == b'.' {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let frac_digits = end - frac_start;
        if digits + frac_digits > 0 {
            digits += frac_digits;
            idx = end;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when followed by at least one digit
    if allow_fraction && idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
        let mut end = idx + 1;
        if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        let exp_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > exp_start {
            idx = end;
        }
    }

    idx
}

fn leading_number(raw: &str, allow_fraction: bool) -> Option<f64> {
    let s = raw.trim_start();
    let len = numeric_prefix_len(s, allow_fraction);
    if len == 0 {
        return None;
    }
    s[..len].parse::<f64>().ok()
}

fn non_negative_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Decimal field (distance). Reads the leading decimal number, else 0.
pub fn parse_float_or_zero(raw: &str) -> f64 {
    non_negative_or_zero(leading_number(raw, true))
}

/// Whole-number field (hours, minutes, seconds, pace parts). Reads the leading
/// integer and ignores any fraction (`"3.7"` is 3), else 0.
pub fn parse_int_or_zero(raw: &str) -> f64 {
    non_negative_or_zero(leading_number(raw, false))
}

/// Strictly parse a field. A blank field is 0; anything else must be a
/// complete, finite, non-negative number.
pub fn parse_field(field: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_invalid_number(field, raw)?;

    if value < 0.0 {
        return Err(PlannerError::NegativeValue {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}
