//! Binary data: raw buffers, DataViews and the typed-array family.

use crate::gates::{is_object_like, object_tagged};
use crate::tag::{tag_of, Tag};
use core_types::{ObjectKind, TypedArrayKind, Value};

/// `ArrayBuffer`
pub fn is_array_buffer(value: &Value) -> bool {
    object_tagged(value, Tag::ArrayBuffer)
}

/// `SharedArrayBuffer`
pub fn is_shared_array_buffer(value: &Value) -> bool {
    object_tagged(value, Tag::SharedArrayBuffer)
}

/// Either an `ArrayBuffer` or a `SharedArrayBuffer`.
pub fn is_any_array_buffer(value: &Value) -> bool {
    is_object_like(value) && matches!(tag_of(value), Tag::ArrayBuffer | Tag::SharedArrayBuffer)
}

/// Determines whether the value is a view over a buffer: any typed array
/// or a `DataView`.
///
/// Checks the internal kind directly, the way `ArrayBuffer.isView` does.
pub fn is_array_buffer_view(value: &Value) -> bool {
    matches!(
        value,
        Value::Object(obj) if matches!(*obj.kind(), ObjectKind::DataView(_) | ObjectKind::TypedArray(..))
    )
}

/// `DataView`
pub fn is_data_view(value: &Value) -> bool {
    object_tagged(value, Tag::DataView)
}

/// Element kind of a typed array, `None` for anything else.
pub fn typed_array_kind(value: &Value) -> Option<TypedArrayKind> {
    if !is_object_like(value) {
        return None;
    }
    match tag_of(value) {
        Tag::TypedArray(kind) => Some(kind),
        _ => None,
    }
}

/// Determines whether the value is a typed array of any element kind.
///
/// # Examples
///
/// ```
/// use type_checks::is_typed_array;
/// use core_types::{JsObject, TypedArrayKind, Value};
///
/// let bytes = JsObject::typed_array(TypedArrayKind::Uint8, 0).unwrap();
/// let buffer = JsObject::array_buffer(0).unwrap();
///
/// assert!(is_typed_array(&Value::from(bytes)));
/// assert!(!is_typed_array(&Value::from(buffer)));
/// ```
pub fn is_typed_array(value: &Value) -> bool {
    typed_array_kind(value).is_some()
}

fn is_typed_array_of(value: &Value, kind: TypedArrayKind) -> bool {
    object_tagged(value, Tag::TypedArray(kind))
}

/// `Int8Array`
pub fn is_int8_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Int8)
}

/// `Uint8Array`
pub fn is_uint8_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Uint8)
}

/// `Uint8ClampedArray`
pub fn is_uint8_clamped_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Uint8Clamped)
}

/// `Int16Array`
pub fn is_int16_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Int16)
}

/// `Uint16Array`
pub fn is_uint16_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Uint16)
}

/// `Int32Array`
pub fn is_int32_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Int32)
}

/// `Uint32Array`
pub fn is_uint32_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Uint32)
}

/// `Float16Array`
pub fn is_float16_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Float16)
}

/// `Float32Array`
pub fn is_float32_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Float32)
}

/// `Float64Array`
pub fn is_float64_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::Float64)
}

/// `BigInt64Array`
pub fn is_big_int64_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::BigInt64)
}

/// `BigUint64Array`
pub fn is_big_uint64_array(value: &Value) -> bool {
    is_typed_array_of(value, TypedArrayKind::BigUint64)
}
