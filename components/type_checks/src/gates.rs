//! Cheap `typeof` checks run before computing a tag.
//!
//! Functions are never object-like here: predicates for the function kinds
//! gate on [`is_function_like`], every other atomic predicate on
//! [`is_object_like`].

use crate::tag::{tag_of, Tag};
use core_types::Value;

/// Non-null and `typeof` reports `"object"`.
pub(crate) fn is_object_like(value: &Value) -> bool {
    !matches!(value, Value::Null) && value.type_of() == "object"
}

/// Non-null and `typeof` reports `"function"`.
pub(crate) fn is_function_like(value: &Value) -> bool {
    !matches!(value, Value::Null) && value.type_of() == "function"
}

/// Object-like and tagged `tag`.
pub(crate) fn object_tagged(value: &Value, tag: Tag) -> bool {
    is_object_like(value) && tag_of(value) == tag
}

/// Function-like and tagged `tag`.
pub(crate) fn function_tagged(value: &Value, tag: Tag) -> bool {
    is_function_like(value) && tag_of(value) == tag
}
