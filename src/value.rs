//! Value positions in a decoded document tree
//!
//! The decoded tree itself is `serde_json::Value`. A [`Slot`] adds the one
//! state the tree cannot express: a declared field that is absent from its
//! parent object. JSON `null` is a present value.

use serde_json::Value;

/// Fractional digits used when deciding whether a float is a whole number.
const WHOLE_NUMBER_DIGITS: usize = 6;

/// A position being validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    /// The key was absent and its absence was tolerated by the parent.
    Missing,
    /// The position holds a value, possibly `null`.
    Present(&'a Value),
}

impl<'a> Slot<'a> {
    /// Returns the held value, if any.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Slot::Missing => None,
            Slot::Present(value) => Some(value),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Slot::Missing)
    }

    /// Returns the type name for log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Slot::Missing => "missing",
            Slot::Present(value) => type_name(value),
        }
    }
}

impl<'a> From<&'a Value> for Slot<'a> {
    fn from(value: &'a Value) -> Self {
        Slot::Present(value)
    }
}

/// Returns the JSON type name of a value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether a number is integral.
///
/// Native integers always are. A float counts when its fractional part,
/// printed with six fixed decimal places, is all zeros; `2.0000001` is
/// therefore integral while `2.5` is not.
pub fn is_whole_number(number: &serde_json::Number) -> bool {
    if number.is_i64() || number.is_u64() {
        return true;
    }
    match number.as_f64() {
        Some(f) if f.is_finite() => {
            let printed = format!("{:.*}", WHOLE_NUMBER_DIGITS, f);
            printed
                .split_once('.')
                .map_or(true, |(_, fraction)| fraction.chars().all(|c| c == '0'))
        }
        _ => false,
    }
}

/// Number of fractional digits in the shortest round-trip form of a number.
pub fn fractional_digits(number: &serde_json::Number) -> usize {
    if number.is_i64() || number.is_u64() {
        return 0;
    }
    let printed = number.to_string();
    let mantissa_end = printed.find(['e', 'E']).unwrap_or(printed.len());
    let mantissa = &printed[..mantissa_end];
    let digits = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.trim_end_matches('0').len());

    // 1.5e-3 carries three more fractional digits than its mantissa shows
    let exponent: i64 = printed
        .get(mantissa_end + 1..)
        .and_then(|e| e.parse().ok())
        .unwrap_or(0);
    (digits as i64 - exponent).max(0) as usize
}
