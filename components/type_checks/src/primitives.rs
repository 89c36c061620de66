//! Primitive values and their boxed wrapper objects.

use crate::gates::object_tagged;
use crate::tag::Tag;
use core_types::Value;

/// Determines whether the value is a primitive rather than an object.
///
/// Equivalent to `Object(value) !== value`: boxed primitives are objects
/// and report `false`.
pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Object(_))
}

/// Determines whether the value is a finite number.
///
/// `NaN` and the infinities are not finite, and numeric strings are not
/// numbers.
///
/// # Examples
///
/// ```
/// use type_checks::is_finite_number;
/// use core_types::Value;
///
/// assert!(is_finite_number(&Value::Smi(3)));
/// assert!(is_finite_number(&Value::Double(3.2)));
/// assert!(!is_finite_number(&Value::from("2")));
/// assert!(!is_finite_number(&Value::Double(f64::NAN)));
/// ```
pub fn is_finite_number(value: &Value) -> bool {
    value.as_number().is_some_and(f64::is_finite)
}

/// `new Boolean(..)`
pub fn is_boolean_object(value: &Value) -> bool {
    object_tagged(value, Tag::Boolean)
}

/// `new String(..)`
pub fn is_string_object(value: &Value) -> bool {
    object_tagged(value, Tag::String)
}

/// `new Number(..)`
pub fn is_number_object(value: &Value) -> bool {
    object_tagged(value, Tag::Number)
}

/// `Object(Symbol(..))`
pub fn is_symbol_object(value: &Value) -> bool {
    object_tagged(value, Tag::Symbol)
}

/// `Object(1n)`
pub fn is_big_int_object(value: &Value) -> bool {
    object_tagged(value, Tag::BigInt)
}

/// Determines whether the value is any of the five boxed primitive wrappers.
///
/// Bare primitives are never boxed.
pub fn is_boxed_primitive(value: &Value) -> bool {
    is_boolean_object(value)
        || is_string_object(value)
        || is_number_object(value)
        || is_symbol_object(value)
        || is_big_int_object(value)
}
