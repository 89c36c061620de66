//! Plain objects, dates, regular expressions, errors, and the odd ones out
//! (arguments objects and module namespaces).

use crate::gates::object_tagged;
use crate::tag::{tag_of, Tag};
use core_types::{ObjectKind, Value};

/// Determines whether the value is a plain `Object`.
///
/// Only ordinary objects qualify: arrays, functions and other built-ins
/// carry their own tag.
///
/// # Examples
///
/// ```
/// use type_checks::is_object;
/// use core_types::{ObjectKind, Value};
///
/// assert!(is_object(&Value::object()));
/// assert!(!is_object(&Value::Smi(3)));
/// assert!(!is_object(&Value::from("2")));
/// ```
pub fn is_object(value: &Value) -> bool {
    tag_of(value) == Tag::Object
}

/// `Date`
pub fn is_date(value: &Value) -> bool {
    object_tagged(value, Tag::Date)
}

/// `RegExp`
pub fn is_reg_exp(value: &Value) -> bool {
    object_tagged(value, Tag::RegExp)
}

/// Determines whether the value is a native error.
///
/// Every built-in error type (`TypeError`, `RangeError`, ...) counts, since
/// they all share the `Error` tag.
pub fn is_native_error(value: &Value) -> bool {
    object_tagged(value, Tag::Error)
}

/// The `arguments` object of a function call
pub fn is_arguments_object(value: &Value) -> bool {
    object_tagged(value, Tag::Arguments)
}

/// `import * as ns` namespace objects
pub fn is_module_namespace_object(value: &Value) -> bool {
    object_tagged(value, Tag::Module)
}

/// Determines whether any own enumerable value of `container` is strictly
/// equal to `candidate`, the way a lookup over a string enum object works.
///
/// Array, arguments and typed-array elements count alongside named
/// properties. Primitives have no own values here and always give `false`.
///
/// # Examples
///
/// ```
/// use type_checks::is_enum_value;
/// use core_types::{JsObject, Value};
///
/// let mode = JsObject::ordinary();
/// mode.set("Light", Value::from("light"));
/// mode.set("Dark", Value::from("dark"));
///
/// assert!(is_enum_value(&Value::from(mode.clone()), &Value::from("dark")));
/// assert!(!is_enum_value(&Value::from(mode), &Value::from("Dark")));
/// ```
pub fn is_enum_value(container: &Value, candidate: &Value) -> bool {
    let Value::Object(obj) = container else {
        return false;
    };
    let elements = match &*obj.kind() {
        ObjectKind::Array(elements) | ObjectKind::Arguments(elements) => elements.clone(),
        ObjectKind::TypedArray(kind, view) => view.elements(*kind),
        _ => Vec::new(),
    };
    elements
        .into_iter()
        .chain(obj.own_properties().into_iter().map(|(_, value)| value))
        .any(|value| value.strict_equals(candidate))
}
