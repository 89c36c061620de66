//! Runtime classification of JavaScript values.
//!
//! This crate answers "what built-in kind is this value?" for any
//! [`Value`](core_types::Value), in the manner of `util.types`:
//!
//! - [`tag_of`] / [`object_to_string`] - the `[object X]` classification tag
//! - `is_*` predicates - one per built-in kind, plus a few unions
//!   ([`is_boxed_primitive`], [`is_typed_array`], [`is_any_array_buffer`])
//! - [`to_sequence`] / [`normalize_to_sequence`] - array conversions
//!
//! Every predicate accepts any value and returns `false` rather than
//! failing when the value is not of its kind.
//!
//! Tags come from an object's internal kind, never from its own
//! properties. Values are assumed to come from a single realm; an object
//! whose prototype has been replaced still classifies by its kind.
//!
//! # Example
//!
//! ```
//! use core_types::{FunctionKind, JsObject, Value};
//! use type_checks::{is_async_function, is_boxed_primitive, is_map, is_object, to_sequence};
//!
//! assert!(is_object(&Value::object()));
//! assert!(is_map(&Value::from(JsObject::map())));
//! assert!(is_async_function(&Value::from(JsObject::function(FunctionKind::Async))));
//!
//! let boxed = Value::from(JsObject::wrap(&Value::Boolean(true)));
//! assert!(is_boxed_primitive(&boxed));
//! assert!(!is_boxed_primitive(&Value::Boolean(true)));
//!
//! assert!(to_sequence(&Value::Undefined).is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod binary;
mod collections;
mod convert;
mod functions;
mod gates;
mod objects;
mod primitives;
mod tag;

pub use binary::{
    is_any_array_buffer, is_array_buffer, is_array_buffer_view, is_big_int64_array,
    is_big_uint64_array, is_data_view, is_float16_array, is_float32_array, is_float64_array,
    is_int16_array, is_int32_array, is_int8_array, is_shared_array_buffer, is_typed_array,
    is_uint16_array, is_uint32_array, is_uint8_array, is_uint8_clamped_array, typed_array_kind,
};
pub use collections::{
    is_array, is_map, is_map_iterator, is_set, is_set_iterator, is_weak_map, is_weak_set,
};
pub use convert::{normalize_to_sequence, to_sequence};
pub use functions::{
    is_async_function, is_generator_function, is_generator_object, is_ordinary_function,
    is_promise,
};
pub use objects::{
    is_arguments_object, is_date, is_enum_value, is_module_namespace_object, is_native_error,
    is_object, is_reg_exp,
};
pub use primitives::{
    is_big_int_object, is_boolean_object, is_boxed_primitive, is_finite_number, is_number_object,
    is_primitive, is_string_object, is_symbol_object,
};
pub use tag::{object_to_string, tag_of, Category, Tag, TagParseError};
