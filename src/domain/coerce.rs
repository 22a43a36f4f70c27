//! Lenient number coercion for JSON request fields.
//!
//! Checkout clients send ids and quantities as numbers or numeric strings, so
//! payload fields are accepted as raw [`serde_json::Value`]s and coerced here.
//! The rules mirror loose numeric conversion: `null`, `""` and `false` become
//! 0, `true` becomes 1, numeric strings are parsed after trimming, and absent
//! fields, objects, arrays and non-numeric strings do not coerce.
//!
//! Free-text fields go through [`to_text`]: scalars are rendered as strings and
//! falsy values (`null`, `false`, `0`, `""`) count as not supplied.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::Value;

/// Coerce a field to a finite `f64`. `None` means the field was absent.
pub fn to_finite_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().ok()?
            }
        }
        Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// Narrow an already-finite number to a database id.
///
/// Fractional or out-of-range values cannot name a row.
pub fn finite_to_id(n: f64) -> Option<i32> {
    if n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return None;
    }
    Some(n as i32)
}

/// Coerce a field to a row id.
pub fn to_record_id(value: Option<&Value>) -> Option<i32> {
    to_finite_number(value).and_then(finite_to_id)
}

/// Parse a path segment such as `/products/{id}` into a row id.
pub fn parse_record_id(raw: &str) -> Option<i32> {
    to_record_id(Some(&Value::String(raw.to_string())))
}

/// Coerce a line-item quantity. Anything that is not at least 1 after
/// truncation falls back to 1.
pub fn to_quantity(value: Option<&Value>) -> i32 {
    match to_finite_number(value) {
        Some(n) if n >= 1.0 => n.trunc().min(f64::from(i32::MAX)) as i32,
        _ => 1,
    }
}

/// Coerce a monetary amount, keeping the shortest decimal representation of
/// the number so `20.1` stays `20.1` rather than its binary expansion.
pub fn to_decimal(value: Option<&Value>) -> Option<BigDecimal> {
    let n = to_finite_number(value)?;
    BigDecimal::from_str(&n.to_string()).ok()
}

/// Coerce a free-text field such as a customer's phone number.
pub fn to_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some(true.to_string()),
        _ => None,
    }
}
