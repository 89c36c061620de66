//! Conversions from array-likes and single values to arrays.

use crate::collections::is_array;
use crate::tag::tag_of;
use core_types::{JsError, JsObject, JsResult, ObjectKind, Value};
use std::rc::Rc;

/// Largest length an array may have.
const MAX_ARRAY_LENGTH: f64 = u32::MAX as f64;

/// Array-likes up to this length are copied with every hole filled.
/// Longer ones stop after their highest own index.
const DENSE_COPY_LIMIT: usize = 1 << 16;

/// Copies an array-like value into a fresh array.
///
/// Falsy input (`undefined`, `null`, `""`, `0`, ...) yields an empty array.
/// Arrays, arguments objects, typed arrays, strings, host collections and
/// objects with a numeric `length` are copied element by element; anything
/// else yields an empty array. The copy is a snapshot: later changes to the
/// source are not reflected.
///
/// Strings are split by Unicode scalar value, so a character outside the
/// Basic Multilingual Plane (an emoji, say) yields one element where
/// `Array.prototype.slice` would yield two UTF-16 code units.
///
/// A plain object whose `length` exceeds 65536 is copied only up to its
/// highest own index property; the trailing holes are not materialised.
///
/// # Errors
///
/// RangeError when the source reports a length above `2^32 - 1`. Errors
/// raised by a host collection while reading an item are returned as is.
///
/// # Examples
///
/// ```
/// use type_checks::{is_array, to_sequence};
/// use core_types::{JsObject, Value};
///
/// let empty = to_sequence(&Value::Null).unwrap();
/// assert!(is_array(&empty));
///
/// let args = Value::from(JsObject::arguments(vec![Value::Smi(1), Value::Smi(2)]));
/// let copy = to_sequence(&args).unwrap();
/// assert!(is_array(&copy));
/// ```
pub fn to_sequence(value: &Value) -> JsResult<Value> {
    let elements = if !value.is_truthy() {
        Vec::new()
    } else {
        match value {
            Value::String(s) => code_points(s),
            Value::Object(obj) => object_elements(obj)?,
            _ => Vec::new(),
        }
    };
    tracing::trace!(tag = %tag_of(value), length = elements.len(), "copied array-like");
    Ok(Value::array(elements))
}

/// Returns arrays unchanged and wraps anything else in a one-element array.
///
/// # Examples
///
/// ```
/// use type_checks::normalize_to_sequence;
/// use core_types::Value;
///
/// let list = Value::array(vec![Value::Smi(1)]);
/// assert_eq!(normalize_to_sequence(list.clone()), list);
///
/// let single = normalize_to_sequence(Value::Smi(1));
/// assert_ne!(single, Value::Smi(1));
/// ```
pub fn normalize_to_sequence(value: Value) -> Value {
    if is_array(&value) {
        value
    } else {
        Value::array(vec![value])
    }
}

fn object_elements(obj: &JsObject) -> JsResult<Vec<Value>> {
    let host = match &*obj.kind() {
        ObjectKind::Array(elements) | ObjectKind::Arguments(elements) => return Ok(elements.clone()),
        ObjectKind::TypedArray(kind, view) => return Ok(view.elements(*kind)),
        ObjectKind::String(s) => return Ok(code_points(s)),
        ObjectKind::Host(host) => Some(Rc::clone(host)),
        _ => None,
    };
    // The kind borrow is released here, so host reads may touch the object.
    match host {
        Some(host) => {
            let length = host.length();
            check_length(length as f64)?;
            (0..length).map(|index| host.item(index)).collect()
        }
        None => indexed_properties(obj),
    }
}

fn indexed_properties(obj: &JsObject) -> JsResult<Vec<Value>> {
    let length = match obj.get("length") {
        Some(length) => to_length(&length)?,
        None => return Ok(Vec::new()),
    };
    let indexed: Vec<(usize, Value)> = obj
        .own_properties()
        .into_iter()
        .filter_map(|(key, value)| array_index(&key).filter(|&i| i < length).map(|i| (i, value)))
        .collect();
    let filled = if length <= DENSE_COPY_LIMIT {
        length
    } else {
        let filled = indexed.iter().map(|(i, _)| i + 1).max().unwrap_or(0);
        tracing::debug!(length, filled, "sparse array-like copied up to its last index");
        filled
    };
    let mut elements = vec![Value::Undefined; filled];
    for (index, value) in indexed {
        elements[index] = value;
    }
    Ok(elements)
}

/// Canonical array index: decimal, no leading zeros, below `2^32 - 1`.
fn array_index(key: &str) -> Option<usize> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index as usize)
}

fn to_length(value: &Value) -> JsResult<usize> {
    let n = match value {
        Value::Smi(n) => *n as f64,
        Value::Double(n) => *n,
        Value::Boolean(b) => f64::from(u8::from(*b)),
        Value::String(s) => string_to_number(s),
        _ => f64::NAN,
    };
    if n.is_nan() || n <= 0.0 {
        return Ok(0);
    }
    let n = n.floor();
    check_length(n)?;
    Ok(n as usize)
}

/// `ToNumber` applied to a string.
fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if unsigned == "Infinity" {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    // Rust also accepts "inf" and "nan", which JavaScript does not.
    if !unsigned.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

fn check_length(length: f64) -> JsResult<()> {
    if length > MAX_ARRAY_LENGTH {
        tracing::debug!(length, "array-like length too large");
        return Err(JsError::range_error("Invalid array length"));
    }
    Ok(())
}

fn code_points(s: &str) -> Vec<Value> {
    s.chars().map(|c| Value::String(c.to_string())).collect()
}
