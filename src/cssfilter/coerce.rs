//! Value coercion.
//!
//! Turns a raw token value into a typed, clamped, unit-tagged value for a
//! given catalog definition, and formats values back into CSS text.

use crate::catalog::{FilterDefinition, ValueKind};
use crate::error::{FilterError, Result};
use crate::model::FilterValue;

/// A coerced value together with the unit actually written.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    pub value: FilterValue,
    pub unit: String,
}

/// Coerces `raw` against `def`.
///
/// - Free text is kept verbatim with an empty unit.
/// - Numeric kinds take the leading number and the trailing unit. A unitless
///   percentage is a fraction: `0.5` becomes `50%`. Other kinds keep a
///   missing unit empty.
/// - The magnitude is clamped to the definition's range.
pub fn coerce(def: &FilterDefinition, raw: &str) -> Result<Coerced> {
    if !def.kind.is_numeric() {
        return Ok(Coerced {
            value: FilterValue::Text(raw.to_string()),
            unit: String::new(),
        });
    }

    let (mut magnitude, mut unit) = split_number(raw).ok_or_else(|| invalid(def, raw))?;

    if def.kind == ValueKind::Percentage && unit.is_empty() {
        magnitude *= 100.0;
        unit = ValueKind::Percentage.unit().to_string();
    }

    if let Some(range) = def.range {
        magnitude = range.clamp(magnitude);
    }
    if !magnitude.is_finite() {
        return Err(invalid(def, raw));
    }

    Ok(Coerced {
        value: FilterValue::Number(normalize_zero(magnitude)),
        unit,
    })
}

pub(crate) fn invalid(def: &FilterDefinition, raw: &str) -> FilterError {
    FilterError::InvalidValue {
        name: def.name.to_string(),
        raw: raw.to_string(),
    }
}

/// Splits `raw` into its leading number and trailing unit.
///
/// Returns `None` when there is no leading number, or when what follows it is
/// not a unit (ASCII letters or `%`).
fn split_number(raw: &str) -> Option<(f64, String)> {
    let text = raw.trim();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    // Exponent only when digits follow, so `2em` stays a unit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let magnitude: f64 = text[..end].parse().ok()?;
    if !magnitude.is_finite() {
        return None;
    }
    let unit = text[end..].trim();
    if !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
        return None;
    }
    Some((magnitude, unit.to_string()))
}

/// Values this large have no fractional digits left to round.
const ROUNDING_LIMIT: f64 = 1e15;

/// Rounds to one decimal place, halves away from zero.
pub fn round_tenths(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return normalize_zero(value);
    }
    normalize_zero((value * 10.0).round() / 10.0)
}

/// Formats a magnitude with no trailing zeros (`30`, `12.5`).
pub fn format_number(value: f64) -> String {
    format!("{}", normalize_zero(value))
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
