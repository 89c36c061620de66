//! Arrays and keyed collections.

use crate::gates::object_tagged;
use crate::tag::Tag;
use core_types::{ObjectKind, Value};

/// Determines whether the value is an `Array`.
///
/// Checks the internal kind directly, the way `Array.isArray` does.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Object(obj) if matches!(*obj.kind(), ObjectKind::Array(_)))
}

/// `Map`
pub fn is_map(value: &Value) -> bool {
    object_tagged(value, Tag::Map)
}

/// `Set`
pub fn is_set(value: &Value) -> bool {
    object_tagged(value, Tag::Set)
}

/// `WeakMap`
pub fn is_weak_map(value: &Value) -> bool {
    object_tagged(value, Tag::WeakMap)
}

/// `WeakSet`
pub fn is_weak_set(value: &Value) -> bool {
    object_tagged(value, Tag::WeakSet)
}

/// Iterator returned by `Map.prototype.entries`, `keys` or `values`
pub fn is_map_iterator(value: &Value) -> bool {
    object_tagged(value, Tag::MapIterator)
}

/// Iterator returned by `Set.prototype.values`, `keys` or `entries`
pub fn is_set_iterator(value: &Value) -> bool {
    object_tagged(value, Tag::SetIterator)
}
